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

//! text presentation of pointing rows for a selected time

use std::fmt::{self, Write as _};
use chrono::{DateTime,Utc};
use strum::EnumString;
use tracing::warn;
use odin_common::{datetime::{parse_datetime,short_utc_datetime_string}, round_to_decimals, sim_clock::Clock};
use crate::{
    errors::{OdinPointingError,Result},
    PointingRow, PointingTable, Target, BORESIGHT_LABEL
};

pub const NOT_AVAILABLE: &str = "N/A";

/// we don't display more decimals than a f64 can carry
pub const MAX_DECIMALS: u32 = 15;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DisplayMode {
    #[default]
    #[strum(serialize="az-el", serialize="azel")]
    AzEl,
    #[strum(serialize="ra-dec", serialize="radec")]
    RaDec,
    #[strum(serialize="both")]
    Both,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AngleUnit {
    #[default]
    #[strum(serialize="degrees", serialize="deg")]
    Degrees,
    #[strum(serialize="radians", serialize="rad")]
    Radians,
}

#[derive(Debug,Clone)]
pub struct ViewOptions {
    pub mode: DisplayMode,
    pub unit: AngleUnit,
    pub decimals: u32,
    pub targets: Vec<Target>,
    pub show_boresight: bool,
}

impl ViewOptions {
    pub fn new (mode: DisplayMode, unit: AngleUnit, decimals: u32, targets: Vec<Target>, show_boresight: bool)->Result<Self> {
        if decimals == 0 || decimals > MAX_DECIMALS {
            return Err( OdinPointingError::InvalidOption( format!("number of decimals has to be within 1..={MAX_DECIMALS}, got {decimals}")))
        }
        Ok( ViewOptions { mode, unit, decimals, targets, show_boresight } )
    }
}

/// the values of one displayed target, converted into the requested unit and rounded
#[derive(Debug,Clone,PartialEq)]
pub struct TargetView {
    pub name: &'static str,
    pub az: Option<f64>,
    pub el: Option<f64>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub distance: Option<f64>,
}

fn convert (v: Option<f64>, opts: &ViewOptions)->Option<f64> {
    v.map( |deg| {
        let v = match opts.unit {
            AngleUnit::Degrees => deg,
            AngleUnit::Radians => deg.to_radians(),
        };
        round_to_decimals( v, opts.decimals)
    })
}

pub fn target_views (row: &PointingRow, opts: &ViewOptions)->Vec<TargetView> {
    let mut views: Vec<TargetView> = opts.targets.iter().map( |target| {
        let f = row.fields(*target);
        TargetView {
            name: target.label(),
            az: convert( f.az, opts),
            el: convert( f.el, opts),
            ra: convert( f.ra, opts),
            dec: convert( f.dec, opts),
            distance: convert( row.distance(*target), opts),
        }
    }).collect();

    if opts.show_boresight {
        let b = row.boresight_position();
        views.push( TargetView {
            name: BORESIGHT_LABEL,
            az: None,
            el: None,
            ra: convert( b.map( |p| p.ra), opts),
            dec: convert( b.map( |p| p.dec), opts),
            distance: None,
        });
    }

    views
}

fn headings (mode: DisplayMode)->&'static [&'static str] {
    match mode {
        DisplayMode::AzEl => &["Target", "AZ", "EL", "delta"],
        DisplayMode::RaDec => &["Target", "RA", "Dec", "delta"],
        DisplayMode::Both => &["Target", "AZ", "EL", "RA", "Dec", "delta"],
    }
}

fn cell (v: Option<f64>, decimals: u32)->String {
    match v {
        Some(v) => format!("{:.*}", decimals as usize, v),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn cells (tv: &TargetView, opts: &ViewOptions)->Vec<String> {
    let d = opts.decimals;
    let mut cs = vec![ tv.name.to_string() ];
    match opts.mode {
        DisplayMode::AzEl => { cs.push( cell(tv.az,d)); cs.push( cell(tv.el,d)); }
        DisplayMode::RaDec => { cs.push( cell(tv.ra,d)); cs.push( cell(tv.dec,d)); }
        DisplayMode::Both => {
            cs.push( cell(tv.az,d)); cs.push( cell(tv.el,d));
            cs.push( cell(tv.ra,d)); cs.push( cell(tv.dec,d));
        }
    }
    cs.push( cell(tv.distance,d));
    cs
}

/// render the selected targets of `row` as a text table
pub fn render_row (row: &PointingRow, opts: &ViewOptions)->String {
    let mut out = String::new();
    let _ = writeln!( out, "closest timestamp found: {}", short_utc_datetime_string( &row.date));

    let views = target_views( row, opts);
    if views.is_empty() {
        warn!("no targets selected");
        return out
    }

    let mut lines: Vec<Vec<String>> = vec![ headings(opts.mode).iter().map( |h| h.to_string()).collect() ];
    for tv in &views { lines.push( cells( tv, opts)) }

    let n_cols = lines[0].len();
    let widths: Vec<usize> = (0..n_cols).map( |i| lines.iter().map( |l| l[i].chars().count()).max().unwrap_or(0)).collect();

    for l in &lines {
        for (i,c) in l.iter().enumerate() {
            if i == 0 {
                let _ = write!( out, "{:<w$}", c, w = widths[i]);
            } else {
                let _ = write!( out, "  {:>w$}", c, w = widths[i]);
            }
        }
        out.push('\n');
    }

    out
}

/// render the row closest to `date`, or `None` if the table is empty
pub fn render_at (table: &PointingTable, date: &DateTime<Utc>, opts: &ViewOptions)->Option<String> {
    table.closest_row(date).map( |row| render_row( row, opts))
}

/// one line summary of the rows between `start` and `end` (e.g. what has been replayed so far)
pub fn render_range_summary (table: &PointingTable, start: &DateTime<Utc>, end: &DateTime<Utc>)->String {
    let rows = table.window( start, end);
    let n_matched = rows.iter().filter( |r| r.boresight.is_some()).count();
    format!("{} rows from {} to {}, {} with boresight",
        rows.len(), short_utc_datetime_string(start), short_utc_datetime_string(end), n_matched)
}

/// the time we show pointing data for, either given explicitly or obtained from a clock
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum QueryTime {
    Given(DateTime<Utc>),
    Clock(DateTime<Utc>),
}

impl QueryTime {
    /// use `date` if it can be parsed, otherwise fall back to `clock`
    pub fn resolve (date: Option<&str>, clock: &dyn Clock)->Self {
        match date {
            Some(ds) => match parse_datetime(ds) {
                Some(t) => QueryTime::Given(t),
                None => {
                    warn!("invalid timestamp '{ds}', defaulting to current time");
                    QueryTime::Clock( clock.now())
                }
            }
            None => QueryTime::Clock( clock.now())
        }
    }

    pub fn date (&self)->DateTime<Utc> {
        match self { QueryTime::Given(t) | QueryTime::Clock(t) => *t }
    }
}

impl fmt::Display for QueryTime {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            QueryTime::Given(t) => write!( f, "query time: {}", short_utc_datetime_string(t)),
            QueryTime::Clock(t) => write!( f, "current UTC time: {}", short_utc_datetime_string(t)),
        }
    }
}
