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
use serde::{Serialize,Deserialize};

pub mod macros;
pub mod datetime;
pub mod config;
pub mod net;

// global fns that can be used with serde(skip_serializing_if="flightpulse_common::is_none")
#[inline] pub fn is_none<T> (opt: &Option<T>)->bool { opt.is_none() }
#[inline] pub fn is_false (b: &bool)->bool { !*b }

/// a geographic bounding box in decimal degrees (WGS84)
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64
}

impl BoundingBox {
    pub fn new (west: f64, south: f64, east: f64, north: f64)->Self {
        BoundingBox{ west, south, east, north }
    }

    /// the `lamin,lamax,lomin,lomax` query parameters used by state vector services
    pub fn to_query_params (&self)->[(&'static str,String);4] {
        [
            ("lamin", self.south.to_string()),
            ("lamax", self.north.to_string()),
            ("lomin", self.west.to_string()),
            ("lomax", self.east.to_string()),
        ]
    }
}
