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

//! nearest-date ("as-of") join of two time series

use std::time::Duration;
use chrono::{DateTime,Utc};
use odin_common::datetime::{abs_duration_between,Dated};
use crate::time_series::TimeSeries;

/// the reference entry that was matched to a primary entry
#[derive(Debug,Clone,PartialEq)]
pub struct Match<R> {
    pub date: DateTime<Utc>,
    pub gap: Duration,
    pub value: R,
}

/// a primary entry together with its (optional) nearest reference entry
#[derive(Debug,Clone,PartialEq)]
pub struct AlignedRow<P,R> {
    pub date: DateTime<Utc>,
    pub primary: P,
    pub reference: Option<Match<R>>,
}

impl<P,R> Dated for AlignedRow<P,R> {
    fn date (&self)->DateTime<Utc> { self.date }
}

/// pair each `primary` entry with the `reference` entry that is closest in time, provided the gap between
/// both does not exceed `max_gap`. Every primary entry produces exactly one output row in input order,
/// rows without a match within `max_gap` have no reference.
///
/// If two reference entries are equally close the earlier one is used.
///
/// Since both series are sorted this is a single merge sweep over both inputs.
pub fn align<P,R> (primary: &TimeSeries<P>, reference: &TimeSeries<R>, max_gap: Duration)->Vec<AlignedRow<P,R>>
    where P: Clone, R: Clone
{
    let refs = reference.entries();
    let mut rows: Vec<AlignedRow<P,R>> = Vec::with_capacity( primary.len());
    let mut j = 0; // first reference entry that is not before the current primary date

    for (date, p) in primary.iter() {
        while j < refs.len() && refs[j].0 < *date { j += 1 }

        let nearest = match (j.checked_sub(1), (j < refs.len()).then_some(j)) {
            (Some(before), Some(after)) => {
                let gap_before = abs_duration_between( &refs[before].0, date);
                let gap_after = abs_duration_between( &refs[after].0, date);
                if gap_before <= gap_after { Some((before,gap_before)) } else { Some((after,gap_after)) }
            }
            (Some(before), None) => Some( (before, abs_duration_between( &refs[before].0, date))),
            (None, Some(after)) => Some( (after, abs_duration_between( &refs[after].0, date))),
            (None, None) => None
        };

        let reference = nearest
            .filter( |(_,gap)| *gap <= max_gap)
            .map( |(k,gap)| Match { date: refs[k].0, gap, value: refs[k].1.clone() });

        rows.push( AlignedRow { date: *date, primary: p.clone(), reference });
    }

    rows
}
