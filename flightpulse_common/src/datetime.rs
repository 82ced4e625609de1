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

use chrono::{DateTime, Utc};
use serde::{Serialize,Deserialize,Serializer,Deserializer};
use std::time::Duration;
use std::fmt;
use parse_duration::parse;

/// milliseconds since the Unix epoch. This is what our JSON responses use for timestamps
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn now ()->Self { EpochMillis( Utc::now().timestamp_millis()) }

    pub fn new (millis: i64)->Self { EpochMillis(millis) }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::<Utc>::from_timestamp_millis(self.0) {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "{}ms", self.0)
        }
    }
}

// simple Duration ctor that does not require nightly features
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }

//--- support for serde

/// deserialize durations from human readable strings such as "5s" or "1min 30s"
pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}
