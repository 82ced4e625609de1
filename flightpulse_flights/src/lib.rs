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
//! the live flight domain of FlightpulseUK
//!
//! raw state vectors are fetched from an upstream provider (see [`opensky`]), parsed into
//! [`opensky::RawState`]s, turned into [`Flight`] records by the [`normalize::Normalizer`] and served as
//! [`FlightBatch`]es by the [`aggregator::Aggregator`], which caches successful fetches for a short time
//! and falls back to static sample data if anything on the live path fails.
//!
//! The static airport and flight-detail tables plus the `/api` router are also defined here.

use std::time::Duration;
use serde::{Deserialize,Serialize};
use tracing::warn;

use flightpulse_common::{
    define_load_config, is_false, is_none, BoundingBox,
    datetime::{deserialize_duration, serialize_duration, secs, EpochMillis}
};

pub mod errors;
pub use errors::{FlightsError,Result};

pub mod units;
pub mod callsign;
pub mod opensky;
pub mod normalize;
pub mod cache;
pub mod fallback;
pub mod aggregator;
pub mod airports;
pub mod flight_details;
pub mod flights_service;

define_load_config!{}

/// the version reported by the health endpoint
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_CONFIG_FILE: &str = "flights.ron";

/// upper bound for the number of flights in a batch, regardless of configuration
pub const MAX_FLIGHTS: usize = 100;

#[derive(Deserialize,Serialize,Debug,Clone)]
#[serde(default)]
pub struct FlightsConfig {
    /// the state vector query endpoint
    pub upstream_url: String,

    /// region we request state vectors for
    pub bounds: BoundingBox,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_timeout: Duration,

    pub user_agent: String,

    pub cache_key: String,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub cache_ttl: Duration,

    /// max number of flights per batch, never more than [`MAX_FLIGHTS`]
    pub max_flights: usize,

    /// origin we report for callsigns that do not map to a known hub
    pub primary_hub: String,

    pub use_cache: bool,
}

impl Default for FlightsConfig {
    fn default()->Self {
        FlightsConfig {
            upstream_url: "https://opensky-network.org/api/states/all".to_string(),
            bounds: BoundingBox::new( -8.0, 49.5, 2.0, 59.0),
            request_timeout: secs(5),
            user_agent: "FlightpulseUK/1.0".to_string(),
            cache_key: "flights-uk".to_string(),
            cache_ttl: secs(15),
            max_flights: MAX_FLIGHTS,
            primary_hub: "LHR".to_string(),
            use_cache: true,
        }
    }
}

impl FlightsConfig {
    /// load `filename` from our config dir, using defaults if there is no such file
    pub fn load (filename: &str)->Result<Self> {
        let mut config: FlightsConfig = load_config_or_default( filename)?;
        if config.max_flights > MAX_FLIGHTS {
            warn!("max_flights {} exceeds {MAX_FLIGHTS}, using {MAX_FLIGHTS}", config.max_flights);
            config.max_flights = MAX_FLIGHTS;
        }
        Ok(config)
    }
}

/// the public record for one aircraft
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct Flight {
    pub icao24: String,
    pub callsign: String,
    pub origin_country: String,
    pub lat: f64,
    pub lng: f64,
    pub altitude: i64,      // [ft]
    pub heading: u16,       // [deg] 0..359
    pub speed: i64,         // [kn]
    pub vertical_rate: i64, // [ft/min]
    pub on_ground: bool,
    pub squawk: String,

    // enrichment
    pub origin: String,
    pub destination: String,
    pub airline: String,
    pub status: String,
    pub aircraft: String,
    pub dep_time: String,
    pub arr_time: String,
    pub remaining: String,
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum FlightSource {
    Live,
    Fallback,
}

/// what the aggregator returns. Batches are never modified after they are handed out
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct FlightBatch {
    pub flights: Vec<Flight>,
    pub timestamp: EpochMillis,
    pub source: FlightSource,
    pub count: usize,

    #[serde(default, skip_serializing_if="is_false")]
    pub from_cache: bool,

    #[serde(default, skip_serializing_if="is_none")]
    pub note: Option<String>,
}

impl FlightBatch {
    pub fn live (flights: Vec<Flight>, timestamp: EpochMillis)->Self {
        let count = flights.len();
        FlightBatch { flights, timestamp, source: FlightSource::Live, count, from_cache: false, note: None }
    }

    pub fn fallback (flights: Vec<Flight>, timestamp: EpochMillis, note: impl ToString)->Self {
        let count = flights.len();
        FlightBatch { flights, timestamp, source: FlightSource::Fallback, count, from_cache: false, note: Some(note.to_string()) }
    }

    pub fn is_live (&self)->bool { self.source == FlightSource::Live }
}
