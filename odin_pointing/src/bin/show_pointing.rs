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
use anyhow::{anyhow,Result};
use clap::Parser;
use tokio::time::{interval,MissedTickBehavior};
use tracing::{info,warn};
use chrono::{DateTime,Utc};
use odin_common::sim_clock::{Clock,SimClock,WallClock};
use odin_pointing::{
    build_pointing_table, PointingConfig, PointingTable, Target,
    view::{render_at,render_range_summary,AngleUnit,DisplayMode,QueryTime,ViewOptions}
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "show target angles and boresight distances for a given or the current time")]
pub struct Args {
    /// pathname of the RON config
    #[arg(short,long, default_value = "pointing.ron")]
    pub config: PathBuf,

    /// time to show (YYYY-MM-DD HH:MM:SS, UTC). If not set use the clock
    #[arg(short,long)]
    pub date: Option<String>,

    /// az-el, ra-dec or both
    #[arg(short,long, default_value = "az-el")]
    pub mode: DisplayMode,

    /// degrees or radians
    #[arg(short,long, default_value = "degrees")]
    pub unit: AngleUnit,

    /// number of decimals
    #[arg(short='n',long, default_value_t = 2)]
    pub decimals: u32,

    /// keep refreshing from the clock until terminated
    #[arg(short,long)]
    pub follow: bool,

    /// use the configured sim clock instead of the wall clock
    #[arg(long)]
    pub sim: bool,

    /// also show the boresight position
    #[arg(long)]
    pub boresight: bool,

    /// targets to show (all if none given)
    pub targets: Vec<Target>,
}

fn get_clock (args: &Args, config: &PointingConfig)->Result<Box<dyn Clock>> {
    if args.sim {
        let sc = config.sim_clock.as_ref().ok_or_else( || anyhow!("no sim_clock configured"))?;
        info!("using sim clock starting at {} with time scale {}", sc.start, sc.time_scale);
        Ok( Box::new( SimClock::from_config(sc)) )
    } else {
        Ok( Box::new( WallClock) )
    }
}

fn show (table: &PointingTable, clock: &dyn Clock, date: Option<&str>, replay_start: Option<DateTime<Utc>>, opts: &ViewOptions) {
    let qt = QueryTime::resolve( date, clock);
    let t = qt.date();

    println!("{qt}");
    match render_at( table, &t, opts) {
        Some(s) => println!("{s}"),
        None => warn!("no pointing data")
    }
    if let Some(start) = replay_start {
        println!("{}", render_range_summary( table, &start, &t));
    }
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = PointingConfig::load( &args.config)?;
    let table = build_pointing_table( &config)?;

    let targets = if args.targets.is_empty() { Target::all() } else { args.targets.clone() };
    let opts = ViewOptions::new( args.mode, args.unit, args.decimals, targets, args.boresight)?;
    let clock = get_clock( &args, &config)?;
    let replay_start = if args.sim { config.sim_clock.as_ref().map( |sc| sc.start) } else { None };

    if !args.follow {
        show( &table, clock.as_ref(), args.date.as_deref(), replay_start, &opts);
        return Ok(())
    }

    let mut ticker = interval( config.refresh_interval);
    ticker.set_missed_tick_behavior( MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => show( &table, clock.as_ref(), None, replay_start, &opts),
            _ = tokio::signal::ctrl_c() => {
                info!("terminated");
                break
            }
        }
    }

    Ok(())
}
