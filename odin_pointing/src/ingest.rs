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

//! readers for the measured gimbal pointing files and the per-target telemetry table

use std::{fs::File, io, path::{Path,PathBuf}};
use chrono::{DateTime,Utc};
use csv::{ReaderBuilder,StringRecord,Trim};
use tracing::{debug,info};
use odin_common::{datetime::parse_datetime, if_let};
use crate::{
    errors::{OdinPointingError,Result,parse_error},
    normalize, AngularPosition, Target, TargetField, TelemetryRecord, TimeSeries
};

pub const DEGREE_GLYPH: char = '°';

/// name of the date column in telemetry tables
pub const EPOCH_COLUMN: &str = "epoch_utc";

/// number of leading lines in gimbal files before the column header line
const GIMBAL_TITLE_LINES: usize = 1;

/// parse a degree value that might be suffixed with a degree glyph ("12.5°").
/// Returns `None` if there is no finite number (this includes "nan" and "inf")
pub fn parse_degrees (s: &str)->Option<f64> {
    let s = s.trim();
    let s = s.strip_suffix(DEGREE_GLYPH).unwrap_or(s).trim_end();
    if s.is_empty() { return None }
    s.parse::<f64>().ok().filter( |v| v.is_finite())
}

fn degrees_field (rec: &StringRecord, idx: usize, name: &str, source: &str)->Result<f64> {
    let row = row_of(rec);
    let s = rec.get(idx).ok_or_else( || parse_error!(source, row, "missing {name} field"))?;
    parse_degrees(s).ok_or_else( || parse_error!(source, row, "invalid {name} degrees '{s}'"))
}

fn timestamp_field (rec: &StringRecord, idx: usize, source: &str)->Result<DateTime<Utc>> {
    let row = row_of(rec);
    let s = rec.get(idx).ok_or_else( || parse_error!(source, row, "missing timestamp field"))?;
    parse_datetime(s).ok_or_else( || parse_error!(source, row, "invalid timestamp '{s}'"))
}

fn row_of (rec: &StringRecord)->u64 {
    rec.position().map( |p| p.line()).unwrap_or(0)
}

/* #region gimbal files *********************************************************************/

/// read measured gimbal pointing data. The first line is a title, followed by a header line and
/// `<timestamp>,<dec>,<ra>` records. Header names are ignored.
/// The result is in file order - see `read_gimbal_files` to obtain a normalized series
pub fn read_gimbal_data (reader: impl io::Read, source: &str)->Result<Vec<(DateTime<Utc>,AngularPosition)>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false) // title line is not a header
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for res in csv_reader.records().skip( GIMBAL_TITLE_LINES + 1) {
        let rec = res?;
        let date = timestamp_field( &rec, 0, source)?;
        let dec = degrees_field( &rec, 1, "dec", source)?;
        let ra = degrees_field( &rec, 2, "ra", source)?;
        entries.push( (date, AngularPosition::new(ra,dec)) );
    }

    Ok(entries)
}

pub fn read_gimbal_file (path: impl AsRef<Path>)->Result<Vec<(DateTime<Utc>,AngularPosition)>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_gimbal_data( file, &path.display().to_string())
}

/// read all gimbal files matching the glob `pattern` into a normalized series
pub fn read_gimbal_files (pattern: &str)->Result<TimeSeries<AngularPosition>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for res in glob::glob(pattern)? {
        paths.push( res?);
    }
    info!("found {} gimbal files for {}", paths.len(), pattern);

    if paths.is_empty() {
        return Err( OdinPointingError::EmptyInput( format!("no gimbal files matching {pattern}")))
    }

    let mut entries = Vec::new();
    for path in &paths {
        let mut file_entries = read_gimbal_file(path)?;
        debug!("read {} gimbal records from {:?}", file_entries.len(), path);
        entries.append( &mut file_entries);
    }

    Ok( normalize(entries) )
}

/* #endregion gimbal files */

/* #region telemetry table ******************************************************************/

#[derive(Debug,Clone,Copy,PartialEq)]
enum Column {
    Epoch,
    Field(TargetField,Target),
    Ignored,
}

fn get_columns (headers: &StringRecord)->Vec<Column> {
    headers.iter().map( |name| {
        if name == EPOCH_COLUMN {
            Column::Epoch
        } else if let Some((field,target)) = TargetField::parse_column(name) {
            Column::Field(field,target)
        } else {
            debug!("ignoring telemetry column {name}");
            Column::Ignored
        }
    }).collect()
}

/// read a telemetry table with an `epoch_utc` column and any number of `<field>_<target>` columns (e.g. `az_sun`).
/// Empty cells are absent values, other columns are ignored. The result is normalized
pub fn read_telemetry_data (reader: impl io::Read, source: &str)->Result<TimeSeries<TelemetryRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    let columns = get_columns( csv_reader.headers()?);
    let epoch_idx = columns.iter().position( |c| *c == Column::Epoch)
        .ok_or_else( || parse_error!(source, 1, "no {EPOCH_COLUMN} column"))?;

    let mut entries = Vec::new();
    for res in csv_reader.records() {
        let rec = res?;
        let date = timestamp_field( &rec, epoch_idx, source)?;
        let mut tr = TelemetryRecord::default();

        for (i,col) in columns.iter().enumerate() {
            if_let! {
                Column::Field(field,target) = col,
                Some(s) = rec.get(i) => {
                    let v = if s.is_empty() {
                        None
                    } else {
                        Some( parse_degrees(s).ok_or_else( || parse_error!(source, row_of(&rec), "invalid value '{s}' for {}", field.column_name(*target)))? )
                    };
                    tr.get_mut(*target).set( *field, v);
                }
            }
        }
        entries.push( (date,tr));
    }

    Ok( normalize(entries) )
}

pub fn read_telemetry (path: impl AsRef<Path>)->Result<TimeSeries<TelemetryRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_telemetry_data( file, &path.display().to_string())
}

/* #endregion telemetry table */
