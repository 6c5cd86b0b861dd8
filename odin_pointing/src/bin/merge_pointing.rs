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
use anyhow::Result;
use clap::Parser;
use tracing::info;
use odin_common::datetime::parse_datetime;
use odin_pointing::{build_pointing_table, PointingConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "merge measured gimbal pointing with target telemetry and compute angular distances")]
pub struct Args {
    /// pathname of the RON config
    #[arg(short,long, default_value = "pointing.ron")]
    pub config: PathBuf,

    /// output file (overrides the configured output_file)
    #[arg(short,long)]
    pub output: Option<PathBuf>,

    /// shift the gimbal series to start at this date (overrides the configured replay_start)
    #[arg(long)]
    pub replay_start: Option<String>,
}

fn main()->Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = PointingConfig::load( &args.config)?;
    if let Some(ds) = &args.replay_start {
        config.replay_start = Some( parse_datetime(ds).ok_or_else( || anyhow::anyhow!("invalid replay start {ds}"))?);
    }

    let table = build_pointing_table( &config)?;
    let output = args.output.unwrap_or_else( || config.output_file.clone());
    table.save( &output)?;

    info!("merged pointing data written to {:?}", output);
    println!("ok.");
    Ok(())
}
