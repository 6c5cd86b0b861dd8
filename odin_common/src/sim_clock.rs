/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! clock abstractions for code that might have to run on simulated instead of wall clock time.
//! Clocks are passed in explicitly - there is no global clock to replace

use std::time::Instant;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use crate::datetime::deserialize_datetime;

/// something that can tell us the current time
pub trait Clock {
    fn now (&self)->DateTime<Utc>;
}

/// the system clock
#[derive(Debug,Clone,Copy,Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now (&self)->DateTime<Utc> { Utc::now() }
}

/// a clock that always reports the same time (mostly for tests)
#[derive(Debug,Clone,Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now (&self)->DateTime<Utc> { self.0 }
}

#[derive(Debug,Clone,Deserialize)]
pub struct SimClockConfig {
    #[serde(deserialize_with="deserialize_datetime")]
    pub start: DateTime<Utc>,

    /// simulated seconds per real second
    pub time_scale: f64,
}

/// a clock that starts at a given sim time and advances with `time_scale` times the elapsed real time
#[derive(Debug,Clone)]
pub struct SimClock {
    sim_start: DateTime<Utc>,
    time_scale: f64,
    real_start: Instant,
}

impl SimClock {
    pub fn new (sim_start: DateTime<Utc>, time_scale: f64)->Self {
        SimClock { sim_start, time_scale, real_start: Instant::now() }
    }

    pub fn from_config (config: &SimClockConfig)->Self {
        SimClock::new( config.start, config.time_scale)
    }

    pub fn sim_start (&self)->DateTime<Utc> { self.sim_start }
    pub fn time_scale (&self)->f64 { self.time_scale }

    /// sim time for a given amount of elapsed real time
    pub fn sim_time_after (&self, real_elapsed: std::time::Duration)->DateTime<Utc> {
        let sim_secs = real_elapsed.as_secs_f64() * self.time_scale;
        let delta = TimeDelta::try_milliseconds( (sim_secs * 1000.0).round() as i64).unwrap_or(TimeDelta::MAX);
        self.sim_start.checked_add_signed(delta).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl Clock for SimClock {
    fn now (&self)->DateTime<Utc> {
        self.sim_time_after( self.real_start.elapsed())
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now (&self)->DateTime<Utc> { (**self).now() }
}
