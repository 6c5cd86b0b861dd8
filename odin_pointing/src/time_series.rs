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

use chrono::{DateTime,TimeZone,Utc};
use odin_common::datetime::closest_index;
use crate::errors::{OdinPointingError,Result,op_failed};

/// an immutable sequence of (UTC date, value) entries with strictly increasing dates.
/// Use `normalize(..)` to create one from unordered input, or `from_sorted(..)` if the input is already ordered
#[derive(Debug,Clone,PartialEq)]
pub struct TimeSeries<T> {
    entries: Vec<(DateTime<Utc>,T)>,
}

impl<T> TimeSeries<T> {
    pub fn empty ()->Self { TimeSeries { entries: Vec::new() } }

    /// this does not re-order - input dates have to be strictly increasing
    pub fn from_sorted (entries: Vec<(DateTime<Utc>,T)>)->Result<Self> {
        if let Some(i) = entries.windows(2).position( |w| w[0].0 >= w[1].0) {
            return Err( OdinPointingError::NotSorted(
                format!("entry {} ({}) not after entry {} ({})", i+1, entries[i+1].0, i, entries[i].0)))
        }
        Ok( TimeSeries { entries } )
    }

    pub fn len (&self)->usize { self.entries.len() }
    pub fn is_empty (&self)->bool { self.entries.is_empty() }

    pub fn entries (&self)->&[(DateTime<Utc>,T)] { &self.entries }
    pub fn iter (&self)->impl Iterator<Item=&(DateTime<Utc>,T)> { self.entries.iter() }
    pub fn get (&self, i: usize)->Option<&(DateTime<Utc>,T)> { self.entries.get(i) }

    pub fn first_date (&self)->Option<DateTime<Utc>> { self.entries.first().map( |e| e.0) }
    pub fn last_date (&self)->Option<DateTime<Utc>> { self.entries.last().map( |e| e.0) }

    /// index of the entry closest to `date` (ties go to the earlier entry)
    pub fn closest_index (&self, date: &DateTime<Utc>)->Option<usize> {
        closest_index( &self.entries, date)
    }

    /// shift all dates so that the first entry is at `start`. Spacing and order are preserved
    pub fn shifted_to (self, start: DateTime<Utc>)->Result<Self> {
        let Some(first) = self.first_date() else { return Ok(self) };
        let delta = start - first;

        let mut entries = Vec::with_capacity( self.entries.len());
        for (date,v) in self.entries {
            let date = date.checked_add_signed(delta).ok_or_else( || op_failed!("date out of range shifting {date} by {delta}"))?;
            entries.push( (date,v));
        }
        Ok( TimeSeries { entries } )
    }

    pub fn into_entries (self)->Vec<(DateTime<Utc>,T)> { self.entries }
}

impl<T> IntoIterator for TimeSeries<T> {
    type Item = (DateTime<Utc>,T);
    type IntoIter = std::vec::IntoIter<(DateTime<Utc>,T)>;

    fn into_iter (self)->Self::IntoIter { self.entries.into_iter() }
}

impl<'a,T> IntoIterator for &'a TimeSeries<T> {
    type Item = &'a (DateTime<Utc>,T);
    type IntoIter = std::slice::Iter<'a,(DateTime<Utc>,T)>;

    fn into_iter (self)->Self::IntoIter { self.entries.iter() }
}

/// turn arbitrary (date,value) input into a `TimeSeries`: convert dates to UTC, sort ascending (stable) and
/// drop entries with duplicate dates, keeping the first occurrence
pub fn normalize<Tz,T,I> (entries: I)->TimeSeries<T> where Tz: TimeZone, I: IntoIterator<Item=(DateTime<Tz>,T)> {
    let mut entries: Vec<(DateTime<Utc>,T)> = entries.into_iter().map( |(d,v)| (d.with_timezone(&Utc), v)).collect();
    entries.sort_by_key( |e| e.0);
    entries.dedup_by_key( |e| e.0);
    TimeSeries { entries }
}
