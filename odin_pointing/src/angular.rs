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

use serde::{Deserialize,Serialize};
use odin_common::{acos,cos,deg,rad,sin};
use crate::errors::{OdinPointingError,Result};

/// a point on the celestial sphere in degrees.
/// Note that values are not normalized or range checked - this is up to the producer
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct AngularPosition {
    pub ra: f64,
    pub dec: f64,
}

impl AngularPosition {
    pub fn new (ra: f64, dec: f64)->Self { AngularPosition { ra, dec } }

    /// great circle separation in degrees
    pub fn separation (&self, other: &AngularPosition)->f64 {
        angular_distance( self.ra, self.dec, other.ra, other.dec)
    }
}

/// great circle distance in degrees between (ra1,dec1) and (ra2,dec2), using the spherical law of cosines.
/// The cosine is clamped to [-1,1] to absorb round-off. NaN inputs yield NaN
pub fn angular_distance (ra1: f64, dec1: f64, ra2: f64, dec2: f64)->f64 {
    let dec1 = rad(dec1);
    let dec2 = rad(dec2);
    let d_ra = rad(ra1) - rad(ra2);

    let cos_theta = sin(dec1)*sin(dec2) + cos(dec1)*cos(dec2)*cos(d_ra);
    deg( acos( cos_theta.clamp(-1.0, 1.0)))
}

/// elementwise `angular_distance` of two equally sized position slices
pub fn angular_distances (a: &[AngularPosition], b: &[AngularPosition])->Result<Vec<f64>> {
    if a.len() != b.len() {
        return Err( OdinPointingError::LengthMismatch{ left: a.len(), right: b.len() })
    }
    Ok( a.iter().zip(b.iter()).map( |(p,q)| p.separation(q)).collect() )
}
