/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

pub mod macros;
pub mod datetime;
pub mod sim_clock;

// syntactic sugar - this is just more readable in many cases
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn acos(x:f64) -> f64 { x.acos() }
#[inline(always)] pub fn deg(x:f64)->f64 { x.to_degrees() }
#[inline(always)] pub fn rad(x:f64)->f64 { x.to_radians() }

/// round to given number of decimal places. NaN and infinite values are returned unchanged
pub fn round_to_decimals (x: f64, decimals: u32) -> f64 {
    if !x.is_finite() { return x }
    let f = 10f64.powi( decimals.min(i32::MAX as u32) as i32);
    let r = (x * f).round() / f;
    if r.is_finite() { r } else { x } // overflow for huge x or decimals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_decimals() {
        assert_eq!( round_to_decimals( 1.23456, 2), 1.23);
        assert_eq!( round_to_decimals( -1.235001, 2), -1.24);
        assert_eq!( round_to_decimals( 42.0, 0), 42.0);
        assert!( round_to_decimals( f64::NAN, 3).is_nan());
        assert_eq!( round_to_decimals( 123.456, u32::MAX), 123.456);
    }
}
