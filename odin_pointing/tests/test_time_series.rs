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

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};
use odin_pointing::{normalize, TimeSeries, errors::OdinPointingError};

fn t (secs: i64)->DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap() + TimeDelta::seconds(secs)
}

#[test]
fn test_normalize_sorts_and_dedups() {
    let raw = vec![ (t(20),"c"), (t(0),"a"), (t(10),"b1"), (t(10),"b2"), (t(30),"d") ];
    let ts = normalize(raw);

    let values: Vec<&str> = ts.iter().map( |e| e.1).collect();
    assert_eq!( values, vec!["a","b1","c","d"]); // first occurrence wins
    assert_eq!( ts.first_date(), Some(t(0)));
    assert_eq!( ts.last_date(), Some(t(30)));
}

#[test]
fn test_normalize_converts_to_utc() {
    let tz = FixedOffset::east_opt(2*3600).unwrap();
    let local = tz.with_ymd_and_hms(2025, 3, 2, 14, 0, 0).unwrap(); // == 12:00 UTC
    let raw = vec![ (local, 1), (tz.with_ymd_and_hms(2025, 3, 2, 13, 0, 0).unwrap(), 0) ];

    let ts = normalize(raw);
    assert_eq!( ts.entries(), &[ (t(-3600), 0), (t(0), 1) ]);
}

#[test]
fn test_normalize_is_idempotent() {
    let ts = normalize( vec![ (t(5),5.0), (t(1),1.0), (t(3),3.0), (t(3),3.5) ]);
    let ts2 = normalize( ts.clone());
    assert_eq!( ts, ts2);

    let empty: TimeSeries<f64> = normalize( Vec::<(DateTime<Utc>,f64)>::new());
    assert!( empty.is_empty());
}

#[test]
fn test_from_sorted() {
    let ts = TimeSeries::from_sorted( vec![ (t(0),0), (t(1),1), (t(2),2) ]).unwrap();
    assert_eq!( ts.len(), 3);

    match TimeSeries::from_sorted( vec![ (t(0),0), (t(2),2), (t(1),1) ]) {
        Err(OdinPointingError::NotSorted(msg)) => println!("expected error: {msg}"),
        other => panic!("expected NotSorted, got {other:?}")
    }

    // duplicates are not strictly increasing either
    assert!( TimeSeries::from_sorted( vec![ (t(0),0), (t(0),1) ]).is_err());
}

#[test]
fn test_shifted_to() {
    let ts = normalize( vec![ (t(100),"a"), (t(110),"b"), (t(130),"c") ]);
    let start = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap();

    let shifted = ts.shifted_to(start).unwrap();
    let dates: Vec<DateTime<Utc>> = shifted.iter().map( |e| e.0).collect();
    assert_eq!( dates, vec![ start, start + TimeDelta::seconds(10), start + TimeDelta::seconds(30) ]);

    let empty: TimeSeries<i32> = TimeSeries::empty();
    assert!( empty.shifted_to(start).unwrap().is_empty());
}

#[test]
fn test_closest() {
    let ts = normalize( (0..10).map( |i| (t(i*10), i)));

    assert_eq!( ts.closest_index( &t(-50)), Some(0));
    assert_eq!( ts.closest_index( &t(24)), Some(2));
    assert_eq!( ts.closest_index( &t(25)), Some(2)); // tie goes to earlier
    assert_eq!( ts.closest_index( &t(26)), Some(3));
    assert_eq!( ts.closest_index( &t(500)), Some(9));
}
