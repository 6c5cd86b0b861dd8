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

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use parse_duration::parse;

// simple Duration ctors that do not require nightly features
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }

/// absolute time difference between two dates as a std Duration
pub fn abs_duration_between (a: &DateTime<Utc>, b: &DateTime<Utc>)->Duration {
    let d = if a >= b { *a - *b } else { *b - *a };
    d.to_std().unwrap_or(Duration::MAX) // can't be negative, only out of range
}

//--- misc string format parsing

/// naive formats we accept. Values without zone information are taken to be UTC
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// parse a ISO-8601'ish datetime spec. Specs with an offset are converted into UTC, specs without are
/// localized as UTC
pub fn parse_datetime (s: &str)->Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.to_utc())
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.to_utc())
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.to_utc())
    }
    if let Some(s) = s.strip_suffix('Z').or_else(|| s.strip_suffix(" UTC")) {
        return parse_naive(s)
    }
    parse_naive(s)
}

fn parse_naive (s: &str)->Option<DateTime<Utc>> {
    NAIVE_FORMATS.iter().find_map( |fmt| NaiveDateTime::parse_from_str(s, fmt).ok()).map( |ndt| ndt.and_utc())
}

/// our canonical text format for UTC timestamps in tabular output
pub fn format_utc_timestamp (dt: &DateTime<Utc>)->String {
    format!("{}", dt.format("%Y-%m-%d %H:%M:%S%.f+00:00"))
}

pub fn short_utc_datetime_string (dt: &DateTime<Utc>) -> String {
    format!("{}", dt.format("%Y-%m-%d %H:%M:%S"))
}

//--- support for serde

pub fn deserialize_datetime <'a,D>(deserializer: D) -> Result<DateTime<Utc>,D::Error> where D: Deserializer<'a> {
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s).ok_or_else( || serde::de::Error::custom(format!("invalid datetime spec '{s}'")))
}

pub fn deserialize_optional_datetime <'a,D>(deserializer: D) -> Result<Option<DateTime<Utc>>,D::Error> where D: Deserializer<'a> {
    let s: Option<String> = Option::deserialize(deserializer)?;
    if let Some(s) = s {
        let dt = parse_datetime(&s).ok_or_else( || serde::de::Error::custom(format!("invalid datetime spec '{s}'")))?;
        return Ok( Some(dt) )
    }
    Ok(None)
}

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}


/* #region dated objects ****************************************************************************************/

/// a type bound for something we can get a date for.
/// The main purpose of this trait is to avoid having to extract DateTime lists out of already existing collections
pub trait Dated {
    fn date (&self)->DateTime<Utc>;
}

impl Dated for DateTime<Utc> {
    fn date (&self)->DateTime<Utc> { *self }
}

impl<T> Dated for (DateTime<Utc>,T) {
    fn date (&self)->DateTime<Utc> { self.0 }
}

/// index of the element with the smallest absolute time difference to `t`, ties going to the earlier element.
/// `dated` has to be sorted in ascending date order
pub fn closest_index<T: Dated> (dated: &[T], t: &DateTime<Utc>)->Option<usize> {
    if dated.is_empty() { return None }

    let i = dated.partition_point( |d| d.date() < *t); // first with date >= t
    if i == 0 {
        Some(0)
    } else if i == dated.len() {
        Some(i-1)
    } else {
        let before = abs_duration_between( &dated[i-1].date(), t);
        let after = abs_duration_between( &dated[i].date(), t);
        if before <= after { Some(i-1) } else { Some(i) }
    }
}

/* #endregion dated objects */
