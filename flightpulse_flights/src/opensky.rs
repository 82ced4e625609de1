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

///! state vector retrieval from the OpenSky network (or anything else that serves the same format)
///! see https://openskynetwork.github.io/opensky-api/rest.html#all-state-vectors

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use flightpulse_common::{net, BoundingBox};
use crate::{FlightsConfig, errors::{payload_error, FlightsError, Result}};

// state vector field indices
const ICAO24: usize = 0;
const CALLSIGN: usize = 1;
const ORIGIN_COUNTRY: usize = 2;
const LONGITUDE: usize = 5;
const LATITUDE: usize = 6;
const BARO_ALTITUDE: usize = 7;
const ON_GROUND: usize = 8;
const VELOCITY: usize = 9;
const TRUE_TRACK: usize = 10;
const VERTICAL_RATE: usize = 11;
const SQUAWK: usize = 14;

/// rows need to reach at least up to the squawk field
pub const MIN_STATE_FIELDS: usize = SQUAWK + 1;

/// the response of a state vector query. Rows are kept as raw JSON values here so that
/// a single non-conforming row does not invalidate the whole response
#[derive(Deserialize,Debug,Default)]
pub struct StateVectors {
    pub time: Option<i64>,

    #[serde(default)]
    pub states: Option<Vec<Value>>,
}

/// the subset of a state vector we use. Position, callsign and kinematics are optional because
/// the upstream reports them as null if they are not known. A null icao24 becomes an empty string
#[derive(Debug,Clone,PartialEq,Default)]
pub struct RawState {
    pub icao24: String,
    pub callsign: Option<String>,
    pub origin_country: Option<String>,
    pub longitude: Option<f64>,     // [deg]
    pub latitude: Option<f64>,      // [deg]
    pub baro_altitude: Option<f64>, // [m]
    pub on_ground: bool,
    pub velocity: Option<f64>,      // [m/s]
    pub true_track: Option<f64>,    // [deg]
    pub vertical_rate: Option<f64>, // [m/s]
    pub squawk: Option<String>,
}

fn opt_str (row: &[Value], idx: usize)->Result<Option<String>> {
    match &row[idx] {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err( payload_error!("field {idx} not a string: {other}"))
    }
}

fn opt_f64 (row: &[Value], idx: usize)->Result<Option<f64>> {
    match &row[idx] {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        other => Err( payload_error!("field {idx} not a number: {other}"))
    }
}

fn opt_bool (row: &[Value], idx: usize)->Result<Option<bool>> {
    match &row[idx] {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        other => Err( payload_error!("field {idx} not a bool: {other}"))
    }
}

impl RawState {
    /// validate a positional state vector row
    pub fn from_row (row: &Value)->Result<RawState> {
        let Some(row) = row.as_array() else {
            return Err( payload_error!("state not an array: {row}"))
        };
        if row.len() < MIN_STATE_FIELDS {
            return Err( payload_error!("state has {} fields, need {MIN_STATE_FIELDS}", row.len()))
        }

        Ok( RawState {
            icao24: opt_str( row, ICAO24)?.unwrap_or_default(),
            callsign: opt_str( row, CALLSIGN)?,
            origin_country: opt_str( row, ORIGIN_COUNTRY)?,
            longitude: opt_f64( row, LONGITUDE)?,
            latitude: opt_f64( row, LATITUDE)?,
            baro_altitude: opt_f64( row, BARO_ALTITUDE)?,
            on_ground: opt_bool( row, ON_GROUND)?.unwrap_or(false),
            velocity: opt_f64( row, VELOCITY)?,
            true_track: opt_f64( row, TRUE_TRACK)?,
            vertical_rate: opt_f64( row, VERTICAL_RATE)?,
            squawk: opt_str( row, SQUAWK)?,
        })
    }
}

/// turn a response into typed states, skipping rows that do not conform. A missing `states` field is an empty result
pub fn parse_states (response: &StateVectors)->Vec<RawState> {
    let Some(rows) = &response.states else { return Vec::new() };

    let mut states = Vec::with_capacity( rows.len());
    for row in rows {
        match RawState::from_row( row) {
            Ok(state) => states.push(state),
            Err(e) => debug!("skipping state vector: {e}")
        }
    }
    states
}

/// parse a complete response body
pub fn parse_response (body: &[u8])->Result<Vec<RawState>> {
    let response: StateVectors = serde_json::from_slice( body).map_err( |e| payload_error!("{e}"))?;
    Ok( parse_states( &response))
}

/// the abstraction of where state vectors come from
#[async_trait]
pub trait FlightProvider: Send + Sync {
    async fn fetch_states (&self)->Result<Vec<RawState>>;
}

/// live provider that queries a state vector service for the configured bounding box
pub struct OpenSkyProvider {
    client: Client,
    url: String,
    bounds: BoundingBox,
}

impl OpenSkyProvider {
    pub fn new (config: &FlightsConfig)->Result<Self> {
        let client = net::build_client( config.request_timeout, &config.user_agent)?;
        Ok( OpenSkyProvider { client, url: config.upstream_url.clone(), bounds: config.bounds } )
    }
}

#[async_trait]
impl FlightProvider for OpenSkyProvider {
    async fn fetch_states (&self)->Result<Vec<RawState>> {
        let query = self.bounds.to_query_params();
        let response: StateVectors = net::get_json( &self.client, &self.url, &query[..]).await?;
        Ok( parse_states( &response))
    }
}

/// provider used when we should not (or cannot) reach the network. Always fails
pub struct OfflineProvider;

#[async_trait]
impl FlightProvider for OfflineProvider {
    async fn fetch_states (&self)->Result<Vec<RawState>> {
        Err( FlightsError::UpstreamTransport("offline mode".to_string()))
    }
}
