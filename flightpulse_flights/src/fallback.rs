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

///! fixed sample flights served whenever live data cannot be obtained

use flightpulse_common::datetime::EpochMillis;
use crate::{Flight, FlightBatch};

pub const FALLBACK_NOTE: &str = "Live data currently unavailable, showing sample flights";

struct SampleFlight {
    icao24: &'static str,
    callsign: &'static str,
    origin_country: &'static str,
    origin: &'static str,
    destination: &'static str,
    lat: f64,
    lng: f64,
    heading: u16,
    altitude: i64,
    speed: i64,
    vertical_rate: i64,
    squawk: &'static str,
    status: &'static str,
    airline: &'static str,
    aircraft: &'static str,
    dep_time: &'static str,
    arr_time: &'static str,
    remaining: &'static str,
}

const SAMPLE_FLIGHTS: [SampleFlight;6] = [
    SampleFlight {
        icao24: "abc123", callsign: "BA458", origin_country: "United Kingdom", origin: "LHR", destination: "CDG",
        lat: 51.15, lng: -0.18, heading: 135, altitude: 36000, speed: 450, vertical_rate: 0, squawk: "5523",
        status: "On Time", airline: "British Airways", aircraft: "Airbus A320", dep_time: "14:15", arr_time: "16:35", remaining: "1h 10m"
    },
    SampleFlight {
        icao24: "def456", callsign: "BA217", origin_country: "United Kingdom", origin: "LHR", destination: "IAD",
        lat: 51.8, lng: -1.2, heading: 285, altitude: 38000, speed: 510, vertical_rate: 0, squawk: "6142",
        status: "On Time", airline: "British Airways", aircraft: "Boeing 777", dep_time: "10:30", arr_time: "14:15", remaining: "2h 45m"
    },
    SampleFlight {
        icao24: "ghi789", callsign: "VS3", origin_country: "United Kingdom", origin: "LHR", destination: "JFK",
        lat: 52.1, lng: -2.5, heading: 270, altitude: 40000, speed: 520, vertical_rate: 0, squawk: "4521",
        status: "Delayed 15m", airline: "Virgin Atlantic", aircraft: "Airbus A350", dep_time: "11:00", arr_time: "14:30", remaining: "3h 15m"
    },
    SampleFlight {
        icao24: "jkl012", callsign: "EZY101", origin_country: "United Kingdom", origin: "MAN", destination: "CDG",
        lat: 51.5, lng: 0.8, heading: 140, altitude: 32000, speed: 420, vertical_rate: -500, squawk: "2314",
        status: "On Time", airline: "easyJet", aircraft: "Airbus A320", dep_time: "13:00", arr_time: "15:20", remaining: "1h 50m"
    },
    SampleFlight {
        icao24: "mno345", callsign: "RYR882", origin_country: "Ireland", origin: "STN", destination: "DUB",
        lat: 52.8, lng: -3.5, heading: 290, altitude: 35000, speed: 440, vertical_rate: 0, squawk: "1234",
        status: "On Time", airline: "Ryanair", aircraft: "Boeing 737", dep_time: "12:45", arr_time: "13:55", remaining: "0h 40m"
    },
    SampleFlight {
        icao24: "pqr678", callsign: "BA123", origin_country: "United Kingdom", origin: "LHR", destination: "JFK",
        lat: 53.2, lng: -4.8, heading: 275, altitude: 36000, speed: 510, vertical_rate: 0, squawk: "7421",
        status: "On Time", airline: "British Airways", aircraft: "Boeing 777-300ER", dep_time: "11:45", arr_time: "14:30", remaining: "2h 15m"
    },
];

impl SampleFlight {
    fn to_flight (&self)->Flight {
        Flight {
            icao24: self.icao24.to_string(),
            callsign: self.callsign.to_string(),
            origin_country: self.origin_country.to_string(),
            lat: self.lat,
            lng: self.lng,
            altitude: self.altitude,
            heading: self.heading,
            speed: self.speed,
            vertical_rate: self.vertical_rate,
            on_ground: false,
            squawk: self.squawk.to_string(),
            origin: self.origin.to_string(),
            destination: self.destination.to_string(),
            airline: self.airline.to_string(),
            status: self.status.to_string(),
            aircraft: self.aircraft.to_string(),
            dep_time: self.dep_time.to_string(),
            arr_time: self.arr_time.to_string(),
            remaining: self.remaining.to_string(),
        }
    }
}

pub fn fallback_flights ()->Vec<Flight> {
    SAMPLE_FLIGHTS.iter().map( SampleFlight::to_flight).collect()
}

/// the batch we return if the live path fails. Always non-empty
pub fn fallback_batch ()->FlightBatch {
    FlightBatch::fallback( fallback_flights(), EpochMillis::now(), FALLBACK_NOTE)
}
