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

///! turning raw state vectors into public flight records

use tracing::debug;

use crate::{Flight, FlightsConfig, MAX_FLIGHTS, opensky::RawState, callsign::CallsignResolver, units::*};

pub const UNKNOWN_COUNTRY: &str = "Unknown";
pub const NO_SQUAWK: &str = "N/A";
pub const UNRESOLVED_DESTINATION: &str = "TBD";
pub const STATUS_ON_GROUND: &str = "On Ground";
pub const STATUS_IN_AIR: &str = "In Air";
pub const UNKNOWN_AIRCRAFT: &str = "Aircraft";
pub const UNKNOWN_TIME: &str = "--:--";
pub const UNKNOWN_REMAINING: &str = "N/A";

/// transponder codes are 4 octal digits. Anything else (e.g. "9999") is reported as N/A
fn is_squawk (s: &str)->bool {
    s.len() == 4 && s.bytes().all( |b| (b'0'..=b'7').contains(&b))
}

fn valid_lat (lat: f64)->bool { lat.is_finite() && (-90.0..=90.0).contains(&lat) }
fn valid_lng (lng: f64)->bool { lng.is_finite() && (-180.0..=180.0).contains(&lng) }

#[derive(Debug,Clone)]
pub struct Normalizer {
    resolver: CallsignResolver,
    max_flights: usize,
}

impl Normalizer {
    /// `max_flights` is bounded by [`MAX_FLIGHTS`]
    pub fn new (resolver: CallsignResolver, max_flights: usize)->Self {
        Normalizer { resolver, max_flights: max_flights.min( MAX_FLIGHTS) }
    }

    pub fn from_config (config: &FlightsConfig)->Self {
        Normalizer::new( CallsignResolver::new( &config.primary_hub), config.max_flights)
    }

    /// normalize states in upstream order. Entries without callsign or valid position are skipped,
    /// and at most `max_flights` records are returned
    pub fn normalize (&self, states: &[RawState])->Vec<Flight> {
        let flights: Vec<Flight> = states.iter()
            .filter_map( |state| self.normalize_state( state))
            .take( self.max_flights)
            .collect();

        debug!("normalized {} of {} state vectors", flights.len(), states.len());
        flights
    }

    /// the flight for a single state, None if mandatory fields are missing or invalid
    pub fn normalize_state (&self, state: &RawState)->Option<Flight> {
        let callsign = state.callsign.as_deref().map( |cs| cs.trim().to_uppercase()).filter( |cs| !cs.is_empty())?;
        let lat = state.latitude.filter( |lat| valid_lat(*lat))?;
        let lng = state.longitude.filter( |lng| valid_lng(*lng))?;

        let squawk = match state.squawk.as_deref().map( str::trim) {
            Some(sq) if is_squawk(sq) => sq.to_string(),
            _ => NO_SQUAWK.to_string()
        };

        let origin_country = match state.origin_country.as_deref().map( str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => UNKNOWN_COUNTRY.to_string()
        };

        let status = if state.on_ground { STATUS_ON_GROUND } else { STATUS_IN_AIR };

        Some( Flight {
            icao24: state.icao24.trim().to_lowercase(),
            origin: self.resolver.origin_hub( Some(callsign.as_str())),
            airline: self.resolver.airline( Some(callsign.as_str())),
            callsign,
            origin_country,
            lat,
            lng,
            altitude: meters_to_feet( state.baro_altitude).max(0),
            heading: to_heading( state.true_track),
            speed: meters_per_sec_to_knots( state.velocity).max(0),
            vertical_rate: meters_per_sec_to_fpm( state.vertical_rate),
            on_ground: state.on_ground,
            squawk,
            destination: UNRESOLVED_DESTINATION.to_string(),
            status: status.to_string(),
            aircraft: UNKNOWN_AIRCRAFT.to_string(),
            dep_time: UNKNOWN_TIME.to_string(),
            arr_time: UNKNOWN_TIME.to_string(),
            remaining: UNKNOWN_REMAINING.to_string(),
        })
    }
}
