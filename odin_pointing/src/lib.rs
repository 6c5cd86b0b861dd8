/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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

//! instrument pointing telemetry: time-aligns measured gimbal (boresight) angles with per-target
//! telemetry and computes the angular distance between the boresight and each target

use std::{fs, path::{Path,PathBuf}, time::Duration};
use chrono::{DateTime,Utc};
use serde::{Deserialize,Serialize,de::DeserializeOwned};
use strum::{EnumCount,EnumIter,EnumString,IntoEnumIterator,IntoStaticStr};
use tracing::info;
use odin_common::{datetime::{deserialize_duration,deserialize_optional_datetime,secs}, sim_clock::SimClockConfig};

pub mod errors;
use errors::{OdinPointingError,Result};

pub mod angular;
pub mod time_series;
pub mod align;
pub mod ingest;
pub mod pointing_table;
pub mod view;

pub use angular::{AngularPosition,angular_distance,angular_distances};
pub use time_series::{TimeSeries,normalize};
pub use align::{align,AlignedRow,Match};
pub use pointing_table::{PointingRow,PointingTable};

/* #region targets ***************************************************************************/

/// the fixed celestial and earth targets we track relative to the instrument boresight
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize,EnumIter,EnumCount,EnumString,IntoStaticStr)]
#[strum(serialize_all="lowercase", ascii_case_insensitive)]
#[serde(rename_all="lowercase")]
pub enum Target {
    Earth,
    Sun,
    Crab,
    Sco,
    Mag,
    Bonus,
}

impl Target {
    /// the stable key used in column names, e.g. `earth` in `ra_earth`
    pub fn key (&self)->&'static str { self.into() }

    pub fn label (&self)->&'static str {
        match self {
            Target::Earth => "Earth",
            Target::Sun => "Sun",
            Target::Crab => "Crab",
            Target::Sco => "Sco",
            Target::Mag => "Mag",
            Target::Bonus => "Bonus",
        }
    }

    #[inline] pub fn index (&self)->usize { *self as usize }

    pub fn all ()->Vec<Target> { Target::iter().collect() }
}

impl std::fmt::Display for Target {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.label()) }
}

/// key of the instrument boresight columns (`ra_lexi`, `dec_lexi`)
pub const BORESIGHT_KEY: &str = "lexi";
pub const BORESIGHT_LABEL: &str = "LEXI";

/// the angular fields we can have per target
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,EnumIter,EnumString,IntoStaticStr)]
#[strum(serialize_all="lowercase", ascii_case_insensitive)]
pub enum TargetField {
    Ra,
    Dec,
    Az,
    El,
}

impl TargetField {
    pub fn key (&self)->&'static str { self.into() }

    pub fn column_name (&self, target: Target)->String {
        format!("{}_{}", self.key(), target.key())
    }

    /// parse a `<field>_<target>` column name
    pub fn parse_column (name: &str)->Option<(TargetField,Target)> {
        let (field,target) = name.trim().split_once('_')?;
        Some( (field.parse().ok()?, target.parse().ok()?) )
    }
}

/// angular telemetry of a single target, all in degrees. Fields not provided by the source are `None`
#[derive(Debug,Clone,Copy,Default,PartialEq,Serialize,Deserialize)]
pub struct TargetFields {
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub az: Option<f64>,
    pub el: Option<f64>,
}

impl TargetFields {
    pub fn get (&self, field: TargetField)->Option<f64> {
        match field {
            TargetField::Ra => self.ra,
            TargetField::Dec => self.dec,
            TargetField::Az => self.az,
            TargetField::El => self.el,
        }
    }

    pub fn set (&mut self, field: TargetField, v: Option<f64>) {
        match field {
            TargetField::Ra => self.ra = v,
            TargetField::Dec => self.dec = v,
            TargetField::Az => self.az = v,
            TargetField::El => self.el = v,
        }
    }

    /// celestial position if we have both right ascension and declination
    pub fn position (&self)->Option<AngularPosition> {
        match (self.ra, self.dec) {
            (Some(ra), Some(dec)) => Some( AngularPosition::new(ra,dec)),
            _ => None
        }
    }
}

/// one row of the target telemetry table - the fields of each target, indexed by `Target`
#[derive(Debug,Clone,Default,PartialEq)]
pub struct TelemetryRecord {
    fields: [TargetFields; Target::COUNT],
}

impl TelemetryRecord {
    pub fn get (&self, target: Target)->&TargetFields { &self.fields[target.index()] }
    pub fn get_mut (&mut self, target: Target)->&mut TargetFields { &mut self.fields[target.index()] }

    pub fn with (mut self, target: Target, fields: TargetFields)->Self {
        self.fields[target.index()] = fields;
        self
    }
}

/* #endregion targets */

/* #region config *****************************************************************************/

fn default_refresh_interval()->Duration { secs(1) }

#[derive(Debug,Clone,Deserialize)]
pub struct PointingConfig {
    /// glob pattern for measured gimbal pointing files
    pub gimbal_files: String,

    /// per-target telemetry table
    pub telemetry_file: PathBuf,

    /// where to store the merged table
    pub output_file: PathBuf,

    /// max time gap between telemetry and gimbal sample to still count as a match
    #[serde(deserialize_with="deserialize_duration")]
    pub max_gap: Duration,

    /// if set the gimbal series is shifted so that its first sample lands on this date (replay of test data)
    #[serde(deserialize_with="deserialize_optional_datetime", default)]
    pub replay_start: Option<DateTime<Utc>>,

    #[serde(deserialize_with="deserialize_duration", default="default_refresh_interval")]
    pub refresh_interval: Duration,

    #[serde(default)]
    pub sim_clock: Option<SimClockConfig>,
}

impl PointingConfig {
    /// load and check a pointing config
    pub fn load (path: impl AsRef<Path>)->Result<Self> {
        let config: PointingConfig = load_config(path)?;
        config.check()?;
        Ok(config)
    }

    /// reject values that deserialize fine but can't be used
    pub fn check (&self)->Result<()> {
        if self.refresh_interval.is_zero() {
            return Err( OdinPointingError::ConfigError("refresh_interval has to be greater than 0".to_string()))
        }
        if let Some(sc) = &self.sim_clock {
            if !(sc.time_scale.is_finite() && sc.time_scale > 0.0) {
                return Err( OdinPointingError::ConfigError( format!("sim_clock time_scale has to be a positive number, got {}", sc.time_scale)))
            }
        }
        Ok(())
    }
}

/// load a RON config from the given path
pub fn load_config<C> (path: impl AsRef<Path>) -> Result<C> where C: DeserializeOwned {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err( |e| OdinPointingError::ConfigError( format!("failed to read config {path:?}: {e}")))?;
    Ok( ron::from_str(&s)? )
}

/* #endregion config */

/// the complete pipeline: read gimbal and telemetry files, align and compute angular distances
pub fn build_pointing_table (config: &PointingConfig)->Result<PointingTable> {
    let mut boresight = ingest::read_gimbal_files( &config.gimbal_files)?;
    if let Some(start) = config.replay_start {
        boresight = boresight.shifted_to(start)?;
        info!("shifted gimbal series to start at {start}");
    }

    let telemetry = ingest::read_telemetry( &config.telemetry_file)?;
    info!("read {} telemetry and {} gimbal records", telemetry.len(), boresight.len());

    Ok( PointingTable::compute( &telemetry, &boresight, config.max_gap) )
}
