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

use std::path::PathBuf;
use chrono::{TimeZone, Utc};
use odin_common::{datetime::{minutes, secs}, sim_clock::SimClock};
use odin_pointing::{build_pointing_table, errors::OdinPointingError, load_config, PointingConfig, Target};

fn manifest_path (rel: &str)->PathBuf {
    PathBuf::from( env!("CARGO_MANIFEST_DIR")).join(rel)
}

fn test_config ()->PointingConfig {
    let mut config = PointingConfig::load( manifest_path("tests/data/pointing.ron")).unwrap();
    config.gimbal_files = manifest_path( &config.gimbal_files).to_string_lossy().to_string();
    config.telemetry_file = manifest_path("").join( &config.telemetry_file);
    config
}

#[test]
fn test_load_test_config() {
    let config = test_config();
    println!("{config:#?}");

    assert_eq!( config.max_gap, minutes(1));
    assert_eq!( config.refresh_interval, secs(1)); // default
    assert!( config.replay_start.is_none());
    assert!( config.sim_clock.is_none());
}

#[test]
fn test_load_example_config() {
    let config: PointingConfig = load_config( manifest_path("configs/pointing.ron")).unwrap();
    println!("{config:#?}");

    assert_eq!( config.replay_start, Some( Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap()));
    let sc = config.sim_clock.as_ref().unwrap();
    assert_eq!( sc.start, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    assert_eq!( SimClock::from_config(sc).time_scale(), 10800.0);
}

#[test]
fn test_config_errors() {
    match load_config::<PointingConfig>( manifest_path("tests/data/no_such_config.ron")) {
        Err(OdinPointingError::ConfigError(msg)) => println!("expected error: {msg}"),
        other => panic!("expected config error, got {other:?}")
    }

    let res: Result<PointingConfig,_> = ron::from_str("PointingConfig( gimbal_files: \"x\" )");
    assert!( res.is_err());
}

fn parse_config (refresh_interval: &str, time_scale: f64)->PointingConfig {
    let s = format!(r#"PointingConfig(
        gimbal_files: "g*.csv", telemetry_file: "t.csv", output_file: "o.csv", max_gap: "1min",
        refresh_interval: "{refresh_interval}",
        sim_clock: Some(( start: "2025-03-01 00:00:00", time_scale: {time_scale:?} )),
    )"#);
    ron::from_str(&s).unwrap()
}

#[test]
fn test_config_check() {
    assert!( parse_config( "2s", 10800.0).check().is_ok());

    // deserializes fine but can't drive a refresh timer
    let config = parse_config( "0s", 10800.0);
    assert_eq!( config.refresh_interval, secs(0));
    match config.check() {
        Err(OdinPointingError::ConfigError(msg)) => println!("expected error: {msg}"),
        other => panic!("expected config error, got {other:?}")
    }

    assert!( matches!( parse_config( "1s", 0.0).check(), Err(OdinPointingError::ConfigError(_))));
    assert!( matches!( parse_config( "1s", -2.0).check(), Err(OdinPointingError::ConfigError(_))));
}

#[test]
fn test_build_pointing_table() {
    let config = test_config();
    let table = build_pointing_table( &config).unwrap();
    assert_eq!( table.len(), 3);
    assert_eq!( table.rows().iter().filter( |r| r.boresight.is_some()).count(), 2);
}

#[test]
fn test_build_replayed_pointing_table() {
    let mut config = test_config();
    config.replay_start = Some( Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 1).unwrap());

    let table = build_pointing_table( &config).unwrap();
    for row in table.rows() { println!("{:?}", row.boresight) }

    let gaps: Vec<_> = table.rows().iter().map( |r| r.boresight.as_ref().map( |m| m.gap)).collect();
    assert_eq!( gaps, vec![ Some(secs(1)), Some(secs(0)), None ]);
    assert!( table.rows()[1].distance(Target::Earth).unwrap().abs() < 1e-5);
}

#[test]
fn test_build_without_gimbal_files() {
    let mut config = test_config();
    config.gimbal_files = manifest_path("tests/data/none_*.csv").to_string_lossy().to_string();
    assert!( matches!( build_pointing_table( &config), Err(OdinPointingError::EmptyInput(_))));
}
