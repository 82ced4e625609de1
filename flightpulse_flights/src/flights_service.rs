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

///! the `/api` routes

use std::sync::Arc;
use axum::{extract::{Query, State}, response::Response, routing::get, Router};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use flightpulse_common::{datetime::EpochMillis, is_none};
use flightpulse_server::{with_api_layers, response::{json_response, ok_json, CachePolicy}};

use crate::{
    API_VERSION, FlightBatch, FlightsError, errors::LookupKey,
    aggregator::Aggregator, airports::{self, Airport}, flight_details::{self, FlightDetails}
};

pub const AIRPORTS_CACHE: CachePolicy = CachePolicy::MaxAge(86400);
pub const FLIGHT_CACHE: CachePolicy = CachePolicy::MaxAge(30);
pub const FLIGHTS_CACHE: CachePolicy = CachePolicy::MaxAge(10);

pub const AVAILABLE_ENDPOINTS: [&str;5] = [
    "/api/flights",
    "/api/flight?callsign=BA123",
    "/api/airports",
    "/api/airports?search=london",
    "/api/health",
];

const FLIGHT_EXAMPLE: &str = "/api/flight?callsign=BA123";

/// the complete API router including CORS, tracing and panic handling
pub fn router (aggregator: Arc<Aggregator>)->Router {
    let routes = Router::new()
        .route( "/api/flights", get( flights_handler))
        .route( "/api/flight", get( flight_handler))
        .route( "/api/airports", get( airports_handler))
        .route( "/api/health", get( health_handler))
        .fallback( not_found_handler)
        .with_state( aggregator);

    with_api_layers( routes)
}

//--- response bodies

#[derive(Serialize)]
struct FlightsResponse<'a> {
    success: bool,
    #[serde(flatten)]
    batch: &'a FlightBatch,
}

#[derive(Serialize)]
struct FlightResponse {
    success: bool,
    flight: &'static FlightDetails,
    timestamp: EpochMillis,
}

#[derive(Serialize)]
struct AirportResponse {
    success: bool,
    airport: &'static Airport,
    timestamp: EpochMillis,
}

#[derive(Serialize)]
struct AirportsResponse {
    success: bool,
    airports: Vec<&'static Airport>,
    count: usize,
    timestamp: EpochMillis,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: EpochMillis,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all="camelCase")]
struct RouteNotFound {
    error: &'static str,
    available_endpoints: &'static [&'static str],
}

/// `{success:false, error, ...context}`
#[derive(Serialize,Default)]
struct ClientError {
    success: bool,
    error: String,
    #[serde(skip_serializing_if="is_none")]
    example: Option<&'static str>,
    #[serde(skip_serializing_if="is_none")]
    callsign: Option<String>,
    #[serde(skip_serializing_if="is_none")]
    iata: Option<String>,
    #[serde(skip_serializing_if="is_none")]
    icao: Option<String>,
}

impl From<&FlightsError> for ClientError {
    fn from (err: &FlightsError)->Self {
        // internal error details are not for clients
        let error = if err.is_client_error() { err.to_string() } else { "Internal server error".to_string() };
        let mut body = ClientError { success: false, error, ..Default::default() };

        match err {
            FlightsError::MissingParameter(LookupKey::Callsign) => body.example = Some(FLIGHT_EXAMPLE),
            FlightsError::NotFound(LookupKey::Callsign, value) => body.callsign = Some(value.clone()),
            FlightsError::NotFound(LookupKey::Iata, value) => body.iata = Some(value.clone()),
            FlightsError::NotFound(LookupKey::Icao, value) => body.icao = Some(value.clone()),
            _ => {}
        }
        body
    }
}

fn error_response (err: FlightsError, cache: CachePolicy)->Response {
    json_response( err.status_code(), &ClientError::from(&err), cache)
}

/// trimmed value of an optional query parameter, empty values count as absent
fn param (value: &Option<String>)->Option<&str> {
    value.as_deref().map( str::trim).filter( |v| !v.is_empty())
}

//--- handlers

async fn flights_handler (State(aggregator): State<Arc<Aggregator>>)->Response {
    let batch = aggregator.get_live_flights().await;
    let cache = if batch.is_live() { FLIGHTS_CACHE } else { CachePolicy::NoHeader };
    ok_json( &FlightsResponse { success: true, batch: &batch }, cache)
}

#[derive(Deserialize,Debug,Default)]
pub struct FlightQuery {
    pub callsign: Option<String>,
}

async fn flight_handler (Query(query): Query<FlightQuery>)->Response {
    let Some(callsign) = param( &query.callsign) else {
        return error_response( FlightsError::MissingParameter( LookupKey::Callsign), CachePolicy::NoHeader)
    };

    match flight_details::find_flight( callsign) {
        Some(flight) => ok_json( &FlightResponse { success: true, flight, timestamp: EpochMillis::now() }, FLIGHT_CACHE),
        None => error_response( FlightsError::NotFound( LookupKey::Callsign, callsign.to_uppercase()), CachePolicy::NoHeader)
    }
}

#[derive(Deserialize,Debug,Default)]
pub struct AirportQuery {
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub search: Option<String>,
}

/// precedence is iata > icao > search > none
async fn airports_handler (Query(query): Query<AirportQuery>)->Response {
    if let Some(iata) = param( &query.iata) {
        let iata = iata.to_uppercase();
        return match airports::find_by_iata( &iata) {
            Some(airport) => airport_response( airport),
            None => error_response( FlightsError::NotFound( LookupKey::Iata, iata), AIRPORTS_CACHE)
        }
    }

    if let Some(icao) = param( &query.icao) {
        let icao = icao.to_uppercase();
        return match airports::find_by_icao( &icao) {
            Some(airport) => airport_response( airport),
            None => error_response( FlightsError::NotFound( LookupKey::Icao, icao), AIRPORTS_CACHE)
        }
    }

    let airports: Vec<&'static Airport> = match param( &query.search) {
        Some(search) => airports::search( &search.to_lowercase()),
        None => airports::all_airports().iter().collect()
    };
    let count = airports.len();
    ok_json( &AirportsResponse { success: true, airports, count, timestamp: EpochMillis::now() }, AIRPORTS_CACHE)
}

fn airport_response (airport: &'static Airport)->Response {
    ok_json( &AirportResponse { success: true, airport, timestamp: EpochMillis::now() }, AIRPORTS_CACHE)
}

async fn health_handler ()->Response {
    ok_json( &HealthResponse { status: "ok", timestamp: EpochMillis::now(), version: API_VERSION }, CachePolicy::NoHeader)
}

async fn not_found_handler ()->Response {
    json_response( StatusCode::NOT_FOUND, &RouteNotFound { error: "Not found", available_endpoints: &AVAILABLE_ENDPOINTS }, CachePolicy::NoHeader)
}
