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

///! conversion of raw sensor units into the units we publish. Absent or non-finite input counts as 0

use uom::si::{f64::{Length,Velocity}, length::{foot,meter}, velocity::{foot_per_minute,knot,meter_per_second}};

#[inline]
fn value_or_zero (v: Option<f64>)->f64 {
    match v {
        Some(v) if v.is_finite() => v,
        _ => 0.0
    }
}

/// [m] -> rounded [ft]
pub fn meters_to_feet (m: Option<f64>)->i64 {
    Length::new::<meter>( value_or_zero(m)).get::<foot>().round() as i64
}

/// [m/s] -> rounded [kn]
pub fn meters_per_sec_to_knots (v: Option<f64>)->i64 {
    Velocity::new::<meter_per_second>( value_or_zero(v)).get::<knot>().round() as i64
}

/// [m/s] -> rounded [ft/min]
pub fn meters_per_sec_to_fpm (v: Option<f64>)->i64 {
    Velocity::new::<meter_per_second>( value_or_zero(v)).get::<foot_per_minute>().round() as i64
}

/// true track [deg] -> heading in 0..359
pub fn to_heading (deg: Option<f64>)->u16 {
    (value_or_zero(deg).round() as i64).rem_euclid(360) as u16
}
