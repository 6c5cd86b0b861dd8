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

use std::time::Duration;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use odin_common::datetime::{minutes, secs};
use odin_pointing::{align, normalize, TimeSeries};

fn t (secs: i64)->DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap() + TimeDelta::seconds(secs)
}

fn series<T> (entries: Vec<(i64,T)>)->TimeSeries<T> {
    normalize( entries.into_iter().map( |(s,v)| (t(s),v)))
}

#[test]
fn test_nearest_match() {
    let primary = series( vec![ (0,"p0"), (14,"p1"), (16,"p2"), (100,"p3") ]);
    let reference = series( vec![ (-5,'a'), (10,'b'), (20,'c'), (30,'d') ]);

    let rows = align( &primary, &reference, minutes(2));
    for r in &rows { println!("{:?}", r) }

    let matched: Vec<Option<char>> = rows.iter().map( |r| r.reference.as_ref().map( |m| m.value)).collect();
    assert_eq!( matched, vec![ Some('a'), Some('b'), Some('c'), Some('d') ]);

    let gaps: Vec<Duration> = rows.iter().map( |r| r.reference.as_ref().unwrap().gap).collect();
    assert_eq!( gaps, vec![ secs(5), secs(4), secs(4), secs(70) ]);
    assert_eq!( rows[3].reference.as_ref().unwrap().date, t(30));
}

#[test]
fn test_max_gap() {
    let primary = series( vec![ (0,0), (100,1), (200,2) ]);
    let reference = series( vec![ (50,'a'), (190,'b') ]);

    let rows = align( &primary, &reference, secs(20));
    assert_eq!( rows.len(), 3);
    assert!( rows[0].reference.is_none()); // 50s away
    assert!( rows[1].reference.is_none()); // 50s/90s away
    assert_eq!( rows[2].reference.as_ref().map( |m| m.value), Some('b'));

    // the boundary is inclusive
    let rows = align( &primary, &reference, secs(50));
    assert_eq!( rows[0].reference.as_ref().map( |m| m.value), Some('a'));
    assert_eq!( rows[1].reference.as_ref().map( |m| m.value), Some('a')); // 'b' is 90s away
}

#[test]
fn test_tie_prefers_earlier() {
    let primary = series( vec![ (10,"p") ]);
    let reference = series( vec![ (5,"early"), (15,"late") ]);

    let rows = align( &primary, &reference, minutes(1));
    let m = rows[0].reference.as_ref().unwrap();
    assert_eq!( m.value, "early");
    assert_eq!( m.gap, secs(5));
}

#[test]
fn test_exact_match_with_zero_gap() {
    let primary = series( vec![ (0,0), (10,1), (20,2) ]);
    let reference = series( vec![ (9,'x'), (10,'y'), (11,'z') ]);

    let rows = align( &primary, &reference, Duration::ZERO);
    assert!( rows[0].reference.is_none());
    assert_eq!( rows[1].reference.as_ref().map( |m| (m.value, m.gap)), Some(('y', Duration::ZERO)));
    assert!( rows[2].reference.is_none());
}

#[test]
fn test_primary_preserved() {
    let primary = series( (0..50).map( |i| (i*7, i)).collect());
    let reference = series( (0..20).map( |i| (i*13 + 3, i)).collect());

    let rows = align( &primary, &reference, secs(2));
    assert_eq!( rows.len(), primary.len());
    for (row, (date,v)) in rows.iter().zip( primary.iter()) {
        assert_eq!( row.date, *date);
        assert_eq!( row.primary, *v);
        if let Some(m) = &row.reference {
            assert!( m.gap <= secs(2));
        }
    }
}

#[test]
fn test_empty_inputs() {
    let empty: TimeSeries<i32> = TimeSeries::empty();
    let reference = series( vec![ (0,'a') ]);
    assert!( align( &empty, &reference, minutes(1)).is_empty());

    let primary = series( vec![ (0,1), (10,2) ]);
    let no_ref: TimeSeries<char> = TimeSeries::empty();
    let rows = align( &primary, &no_ref, minutes(1));
    assert_eq!( rows.len(), 2);
    assert!( rows.iter().all( |r| r.reference.is_none()));
}

#[test]
fn test_against_naive_scan() {
    let primary = series( (0..200).map( |i| ((i*37) % 1000, i)).collect());
    let reference = series( (0..90).map( |i| ((i*53) % 1100 - 50, i)).collect());
    let max_gap = secs(6);

    let rows = align( &primary, &reference, max_gap);

    for row in &rows {
        // brute force: smallest gap, earliest on ties
        let mut best: Option<(Duration,DateTime<Utc>,i64)> = None;
        for (d,v) in reference.iter() {
            let gap = (*d - row.date).abs().to_std().unwrap();
            if best.map( |b| gap < b.0).unwrap_or(true) { best = Some((gap,*d,*v)) }
        }
        let expected = best.filter( |b| b.0 <= max_gap).map( |b| (b.1,b.2));
        let actual = row.reference.as_ref().map( |m| (m.date, m.value));
        assert_eq!( actual, expected, "row at {}", row.date);
    }
}
