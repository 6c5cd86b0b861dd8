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

use std::{fs::File, io, path::Path, time::Duration};
use chrono::{DateTime,Utc};
use strum::{EnumCount,IntoEnumIterator};
use tracing::info;
use odin_common::datetime::{closest_index,format_utc_timestamp,Dated};
use crate::{
    errors::Result,
    align, angular_distance, AngularPosition, Match, Target, TargetField, TargetFields, TelemetryRecord, TimeSeries,
    BORESIGHT_KEY
};

/// a telemetry row with its aligned boresight position and the angular distances between boresight and targets
#[derive(Debug,Clone,PartialEq)]
pub struct PointingRow {
    pub date: DateTime<Utc>,
    pub telemetry: TelemetryRecord,
    pub boresight: Option<Match<AngularPosition>>,
    distances: [Option<f64>; Target::COUNT],
}

impl PointingRow {
    pub fn new (date: DateTime<Utc>, telemetry: TelemetryRecord, boresight: Option<Match<AngularPosition>>)->Self {
        let mut distances = [None; Target::COUNT];
        if let Some(m) = &boresight {
            let b = &m.value;
            for target in Target::iter() {
                distances[target.index()] = telemetry.get(target).position()
                    .map( |p| angular_distance( p.ra, p.dec, b.ra, b.dec));
            }
        }
        PointingRow { date, telemetry, boresight, distances }
    }

    pub fn fields (&self, target: Target)->&TargetFields { self.telemetry.get(target) }

    /// angular distance between target and boresight in degrees. `None` if either position is not known
    pub fn distance (&self, target: Target)->Option<f64> { self.distances[target.index()] }

    pub fn boresight_position (&self)->Option<&AngularPosition> { self.boresight.as_ref().map( |m| &m.value) }
}

impl Dated for PointingRow {
    fn date (&self)->DateTime<Utc> { self.date }
}

/// the merged result table. This is derived data that gets re-computed whenever inputs change
#[derive(Debug,Clone,Default)]
pub struct PointingTable {
    rows: Vec<PointingRow>,
}

impl PointingTable {
    /// align `boresight` to `telemetry` rows and compute target distances
    pub fn compute (telemetry: &TimeSeries<TelemetryRecord>, boresight: &TimeSeries<AngularPosition>, max_gap: Duration)->Self {
        let rows: Vec<PointingRow> = align( telemetry, boresight, max_gap).into_iter()
            .map( |ar| PointingRow::new( ar.date, ar.primary, ar.reference))
            .collect();

        let n_matched = rows.iter().filter( |r| r.boresight.is_some()).count();
        info!("aligned {} telemetry rows, {} with boresight match", rows.len(), n_matched);

        PointingTable { rows }
    }

    pub fn rows (&self)->&[PointingRow] { &self.rows }
    pub fn len (&self)->usize { self.rows.len() }
    pub fn is_empty (&self)->bool { self.rows.is_empty() }

    pub fn closest_index (&self, date: &DateTime<Utc>)->Option<usize> {
        closest_index( &self.rows, date)
    }

    /// the row that is closest in time to `date` (ties go to the earlier row)
    pub fn closest_row (&self, date: &DateTime<Utc>)->Option<&PointingRow> {
        self.closest_index(date).map( |i| &self.rows[i])
    }

    /// the rows with `start <= date <= end`
    pub fn window (&self, start: &DateTime<Utc>, end: &DateTime<Utc>)->&[PointingRow] {
        let i0 = self.rows.partition_point( |r| r.date < *start);
        let i1 = self.rows.partition_point( |r| r.date <= *end);
        if i0 < i1 { &self.rows[i0..i1] } else { &[] }
    }

    /// the (target,field) columns that have at least one value
    fn present_fields (&self)->Vec<(Target,TargetField)> {
        let mut cols = Vec::new();
        for target in Target::iter() {
            for field in TargetField::iter() {
                if self.rows.iter().any( |r| r.fields(target).get(field).is_some()) {
                    cols.push( (target,field));
                }
            }
        }
        cols
    }

    /// write as CSV with `epoch_utc`, the target fields that are present, the boresight fields, the match gap
    /// in seconds and an `angular_distance_<target>` column per target. Absent values are empty cells
    pub fn write_csv (&self, writer: impl io::Write)->Result<()> {
        let fields = self.present_fields();
        let mut w = csv::Writer::from_writer(writer);

        let mut header: Vec<String> = vec![ "epoch_utc".to_string() ];
        for (target,field) in &fields { header.push( field.column_name(*target)) }
        header.push( format!("ra_{BORESIGHT_KEY}"));
        header.push( format!("dec_{BORESIGHT_KEY}"));
        header.push( format!("{BORESIGHT_KEY}_gap_s"));
        for target in Target::iter() { header.push( format!("angular_distance_{}", target.key())) }
        w.write_record( &header)?;

        for row in &self.rows {
            let mut rec: Vec<String> = Vec::with_capacity( header.len());
            rec.push( format_utc_timestamp( &row.date));
            for (target,field) in &fields { rec.push( opt_cell( row.fields(*target).get(*field))) }

            let b = row.boresight.as_ref();
            rec.push( opt_cell( b.map( |m| m.value.ra)));
            rec.push( opt_cell( b.map( |m| m.value.dec)));
            rec.push( opt_cell( b.map( |m| m.gap.as_secs_f64())));

            for target in Target::iter() { rec.push( opt_cell( row.distance(target))) }
            w.write_record( &rec)?;
        }

        w.flush()?;
        Ok(())
    }

    pub fn save (&self, path: impl AsRef<Path>)->Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_csv(file)?;
        info!("saved {} pointing rows to {:?}", self.rows.len(), path);
        Ok(())
    }
}

fn opt_cell (v: Option<f64>)->String {
    v.map( |v| v.to_string()).unwrap_or_default()
}
