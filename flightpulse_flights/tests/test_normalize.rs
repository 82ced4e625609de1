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

use serde_json::{json, Value};
use flightpulse_flights::{
    FlightsConfig, MAX_FLIGHTS, normalize::Normalizer, callsign::CallsignResolver,
    opensky::{parse_response, RawState}
};

// run with "cargo test -p flightpulse_flights --test test_normalize -- --nocapture"

/// a complete state vector row as the upstream sends it
fn row (icao24: &str, callsign: Value, lng: Value, lat: Value) -> Value {
    json!([ icao24, callsign, "United Kingdom", 1700000000, 1700000001, lng, lat, 11000.0, false,
            262.0, 275.3, -2.54, null, 11200.0, "7421", false, 0 ])
}

fn normalizer ()->Normalizer {
    Normalizer::new( CallsignResolver::new("LHR"), 100)
}

#[test]
fn test_parse_response() {
    let body = json!({
        "time": 1700000001,
        "states": [
            row( "4ca7b5", json!("BAW123  "), json!(-4.8), json!(53.2)),
            [ "short", "row" ],
            "not a row",
            row( "4ca7b6", json!(42), json!(-4.8), json!(53.2)), // callsign of wrong type
        ]
    });
    let states = parse_response( body.to_string().as_bytes()).unwrap();
    assert_eq!( states.len(), 1);

    let s = &states[0];
    println!("{s:?}");
    assert_eq!( s.icao24, "4ca7b5");
    assert_eq!( s.callsign.as_deref(), Some("BAW123  "));
    assert_eq!( s.latitude, Some(53.2));
    assert_eq!( s.squawk.as_deref(), Some("7421"));

    // missing or null states are an empty result, not an error
    assert!( parse_response( br#"{"time": 1700000001}"#).unwrap().is_empty());
    assert!( parse_response( br#"{"time": 1700000001, "states": null}"#).unwrap().is_empty());

    // but a body that is not a state vector response is
    assert!( parse_response( b"<html>rate limited</html>").is_err());
    assert!( parse_response( br#"{"states": "none"}"#).is_err());
}

#[test]
fn test_normalize_state() {
    let body = json!({ "states": [ row( "4CA7B5", json!(" baw123 "), json!(-4.8), json!(53.2)) ] });
    let states = parse_response( body.to_string().as_bytes()).unwrap();
    let flights = normalizer().normalize( &states);
    assert_eq!( flights.len(), 1);

    let f = &flights[0];
    println!("{}", serde_json::to_string_pretty(f).unwrap());
    assert_eq!( f.icao24, "4ca7b5");
    assert_eq!( f.callsign, "BAW123");
    assert_eq!( f.origin_country, "United Kingdom");
    assert_eq!( (f.lat, f.lng), (53.2, -4.8));
    assert_eq!( f.altitude, 36089);
    assert_eq!( f.speed, 509);
    assert_eq!( f.vertical_rate, -500);
    assert_eq!( f.heading, 275);
    assert_eq!( f.squawk, "7421");
    assert_eq!( f.origin, "LHR");
    assert_eq!( f.airline, "British Airways");
    assert_eq!( f.destination, "TBD");
    assert_eq!( f.status, "In Air");
    assert_eq!( f.aircraft, "Aircraft");
    assert_eq!( f.dep_time, "--:--");
    assert_eq!( f.remaining, "N/A");

    let v = serde_json::to_value(f).unwrap();
    assert_eq!( v["originCountry"], "United Kingdom");
    assert_eq!( v["verticalRate"], -500);
    assert_eq!( v["onGround"], false);
    assert_eq!( v["depTime"], "--:--");
}

#[test]
fn test_defaults() {
    let state = RawState {
        icao24: "400a0b".to_string(),
        callsign: Some("RYR12".to_string()),
        longitude: Some(0.0),
        latitude: Some(51.9),
        baro_altitude: Some(-30.0),
        on_ground: true,
        squawk: Some("9999".to_string()),
        ..Default::default()
    };
    let f = normalizer().normalize_state( &state).unwrap();
    assert_eq!( f.lng, 0.0); // zero is a valid coordinate
    assert_eq!( f.altitude, 0);
    assert_eq!( f.speed, 0);
    assert_eq!( f.origin_country, "Unknown");
    assert_eq!( f.squawk, "N/A");
    assert_eq!( f.status, "On Ground");
    assert_eq!( f.origin, "STN");
}

#[test]
fn test_filter_invalid() {
    let base = RawState {
        icao24: "400a0b".to_string(),
        callsign: Some("EZY1".to_string()),
        longitude: Some(-1.0),
        latitude: Some(52.0),
        ..Default::default()
    };
    let states = vec![
        RawState { callsign: None, ..base.clone() },
        RawState { callsign: Some("   ".to_string()), ..base.clone() },
        RawState { latitude: None, ..base.clone() },
        RawState { longitude: None, ..base.clone() },
        RawState { latitude: Some(f64::NAN), ..base.clone() },
        RawState { latitude: Some(91.0), ..base.clone() },
        base.clone(),
    ];
    let flights = normalizer().normalize( &states);
    assert_eq!( flights.len(), 1);
    assert!( flights.iter().all( |f| !f.callsign.is_empty() && f.lat.is_finite() && f.lng.is_finite()));
}

#[test]
fn test_cap_preserves_order() {
    let states: Vec<RawState> = (0..150).map( |i| RawState {
        icao24: format!("{i:06x}"),
        callsign: if i % 3 == 0 { None } else { Some(format!("BAW{i}")) },
        longitude: Some(-1.0),
        latitude: Some(52.0),
        ..Default::default()
    }).collect();

    let flights = normalizer().normalize( &states);
    assert_eq!( flights.len(), 100);

    let expected: Vec<String> = (0..150).filter( |i| i % 3 != 0).take(100).map( |i| format!("BAW{i}")).collect();
    let actual: Vec<String> = flights.iter().map( |f| f.callsign.clone()).collect();
    assert_eq!( actual, expected);

    let small = Normalizer::new( CallsignResolver::new("LHR"), 5);
    assert_eq!( small.normalize( &states).len(), 5);
}

#[test]
fn test_null_icao24() {
    let mut no_icao = row( "", json!("VIR3"), json!(-1.5), json!(52.1));
    no_icao[0] = Value::Null;
    let mut bad_icao = row( "", json!("VIR4"), json!(-1.5), json!(52.1));
    bad_icao[0] = json!(42);

    let body = json!({ "states": [ no_icao, bad_icao ] });
    let states = parse_response( body.to_string().as_bytes()).unwrap();
    assert_eq!( states.len(), 1); // a null icao24 is kept, one of the wrong type is not
    assert_eq!( states[0].icao24, "");

    let flights = normalizer().normalize( &states);
    assert_eq!( flights.len(), 1);
    assert_eq!( flights[0].icao24, "");
    assert_eq!( flights[0].callsign, "VIR3");
}

#[test]
fn test_squawk_codes() {
    let base = RawState {
        callsign: Some("BAW9".to_string()),
        longitude: Some(-0.45),
        latitude: Some(51.47),
        ..Default::default()
    };
    let squawk = |sq: &str| {
        let state = RawState { squawk: Some(sq.to_string()), ..base.clone() };
        normalizer().normalize_state( &state).unwrap().squawk
    };
    assert_eq!( squawk("7700"), "7700");
    assert_eq!( squawk(" 0017 "), "0017");
    assert_eq!( squawk("0128"), "N/A"); // not octal
    assert_eq!( squawk("777"), "N/A");
    assert_eq!( squawk("77000"), "N/A");
}

#[test]
fn test_configured_cap_is_bounded() {
    let config: FlightsConfig = ron::from_str( "( max_flights: 500 )").unwrap();
    assert_eq!( config.max_flights, 500);

    let states: Vec<RawState> = (0..300).map( |i| RawState {
        icao24: format!("{i:06x}"),
        callsign: Some(format!("EZY{i}")),
        longitude: Some(-1.0),
        latitude: Some(52.0),
        ..Default::default()
    }).collect();

    let flights = Normalizer::from_config( &config).normalize( &states);
    assert_eq!( flights.len(), MAX_FLIGHTS);
    assert_eq!( flights[99].callsign, "EZY99");
}
