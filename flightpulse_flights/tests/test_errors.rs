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

use http::StatusCode;
use flightpulse_common::net::NetError;
use flightpulse_flights::{FlightsError, errors::LookupKey};

#[test]
fn test_client_errors() {
    let missing = FlightsError::MissingParameter( LookupKey::Callsign);
    assert_eq!( missing.to_string(), "Callsign parameter is required");
    assert_eq!( missing.status_code(), StatusCode::BAD_REQUEST);
    assert!( missing.is_client_error());

    let no_flight = FlightsError::NotFound( LookupKey::Callsign, "ZZ999".to_string());
    assert_eq!( no_flight.to_string(), "Flight not found");
    assert_eq!( no_flight.status_code(), StatusCode::NOT_FOUND);

    let no_airport = FlightsError::NotFound( LookupKey::Icao, "KJFK".to_string());
    assert_eq!( no_airport.to_string(), "Airport not found");
    assert!( no_airport.is_client_error());
    assert!( !no_airport.is_upstream());
}

#[test]
fn test_upstream_errors() {
    let status: FlightsError = NetError::StatusError(429).into();
    assert!( matches!( status, FlightsError::UpstreamStatus(429)));
    assert!( status.is_upstream());
    assert!( !status.is_client_error());
    assert_eq!( status.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload: FlightsError = NetError::ParseError("expected value".to_string()).into();
    assert!( matches!( payload, FlightsError::UpstreamPayload(_)));
}
