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

///! detailed records for the flights we have schedule information for

use serde::Serialize;

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct AirlineInfo {
    pub name: &'static str,
    pub iata: &'static str,
    pub icao: &'static str,
    pub logo: Option<&'static str>,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct AircraftInfo {
    #[serde(rename="type")]
    pub kind: &'static str,
    pub registration: &'static str,
    pub age: &'static str,
    pub icao24: &'static str,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct AirportStop {
    pub iata: &'static str,
    pub icao: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub terminal: &'static str,
    pub gate: &'static str,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct ScheduledTimes {
    pub departure: &'static str,
    pub arrival: &'static str,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct ActualTimes {
    pub departure: Option<&'static str>,
    pub arrival: Option<&'static str>,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct EstimatedTimes {
    pub arrival: &'static str,
}

/// ISO 8601 UTC time strings
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct FlightTimes {
    pub scheduled: ScheduledTimes,
    pub actual: ActualTimes,
    pub estimated: EstimatedTimes,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct FlightStatus {
    pub code: &'static str,
    pub text: &'static str,
    pub delay: u32, // [min]
    pub on_time: bool,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct PositionInfo {
    pub lat: f64,
    pub lng: f64,
    pub altitude: i64,
    pub altitude_unit: &'static str,
    pub speed: i64,
    pub speed_unit: &'static str,
    pub heading: u16,
    pub vertical_speed: i64,
    pub vertical_speed_unit: &'static str,
    pub squawk: &'static str,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct Distance {
    pub total: u32,
    pub flown: u32,
    pub remaining: u32,
    pub unit: &'static str,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct Progress {
    pub percentage: u8,
    pub elapsed: &'static str,
    pub remaining: &'static str,
    pub distance: Distance,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct PastFlight {
    pub date: &'static str,
    pub delay: u32,
    pub status: &'static str,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct History {
    pub on_time_rating: u8, // [%]
    pub average_delay: u32,
    pub delay_unit: &'static str,
    pub last_flights: &'static [PastFlight],
}

#[derive(Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct FlightDetails {
    pub callsign: &'static str,
    pub flight_number: &'static str,
    pub airline: AirlineInfo,
    pub aircraft: AircraftInfo,
    pub origin: AirportStop,
    pub destination: AirportStop,
    pub times: FlightTimes,
    pub status: FlightStatus,
    pub position: PositionInfo,
    pub progress: Progress,
    pub history: History,
}

/// lookup by callsign, which is trimmed and uppercased first
pub fn find_flight (callsign: &str)->Option<&'static FlightDetails> {
    let cs = callsign.trim().to_uppercase();
    FLIGHT_DETAILS.iter().find( |f| f.callsign == cs)
}

//--- the data

const BRITISH_AIRWAYS: AirlineInfo = AirlineInfo { name: "British Airways", iata: "BA", icao: "BAW", logo: None };
const VIRGIN_ATLANTIC: AirlineInfo = AirlineInfo { name: "Virgin Atlantic", iata: "VS", icao: "VIR", logo: None };

const fn heathrow (terminal: &'static str, gate: &'static str)->AirportStop {
    AirportStop {
        iata: "LHR", icao: "EGLL", name: "London Heathrow", city: "London", country: "United Kingdom",
        terminal, gate, lat: 51.4700, lng: -0.4543
    }
}

const fn kennedy (terminal: &'static str, gate: &'static str)->AirportStop {
    AirportStop {
        iata: "JFK", icao: "KJFK", name: "John F. Kennedy International", city: "New York", country: "United States",
        terminal, gate, lat: 40.6413, lng: -73.7781
    }
}

const fn en_route (text: &'static str, delay: u32, on_time: bool)->FlightStatus {
    FlightStatus { code: "EN_ROUTE", text, delay, on_time }
}

const fn position (lat: f64, lng: f64, altitude: i64, speed: i64, heading: u16, squawk: &'static str)->PositionInfo {
    PositionInfo {
        lat, lng,
        altitude, altitude_unit: "ft",
        speed, speed_unit: "kts",
        heading,
        vertical_speed: 0, vertical_speed_unit: "fpm",
        squawk
    }
}

const fn times (sched_dep: &'static str, sched_arr: &'static str, actual_dep: &'static str, est_arr: &'static str)->FlightTimes {
    FlightTimes {
        scheduled: ScheduledTimes { departure: sched_dep, arrival: sched_arr },
        actual: ActualTimes { departure: Some(actual_dep), arrival: None },
        estimated: EstimatedTimes { arrival: est_arr },
    }
}

const fn miles (total: u32, flown: u32, remaining: u32)->Distance {
    Distance { total, flown, remaining, unit: "miles" }
}

const fn history (on_time_rating: u8, average_delay: u32, last_flights: &'static [PastFlight])->History {
    History { on_time_rating, average_delay, delay_unit: "minutes", last_flights }
}

const BA123_HISTORY: [PastFlight;5] = [
    PastFlight { date: "2024-01-14", delay: 5, status: "On Time" },
    PastFlight { date: "2024-01-13", delay: 0, status: "On Time" },
    PastFlight { date: "2024-01-12", delay: 22, status: "Delayed" },
    PastFlight { date: "2024-01-11", delay: 0, status: "On Time" },
    PastFlight { date: "2024-01-10", delay: 3, status: "On Time" },
];

static FLIGHT_DETAILS: [FlightDetails;4] = [
    FlightDetails {
        callsign: "BA123",
        flight_number: "BA 123",
        airline: AirlineInfo {
            logo: Some("https://www.britishairways.com/assets/images/MediaHub/Media-Database/Logos/British-Airways-logo.png"),
            ..BRITISH_AIRWAYS
        },
        aircraft: AircraftInfo { kind: "Boeing 777-300ER", registration: "G-STBJ", age: "5 years", icao24: "pqr678" },
        origin: heathrow( "5", "B32"),
        destination: kennedy( "7", "4"),
        times: times( "2024-01-15T11:45:00Z", "2024-01-15T14:30:00Z", "2024-01-15T11:47:00Z", "2024-01-15T14:28:00Z"),
        status: en_route( "En Route", 0, true),
        position: position( 53.2, -4.8, 36000, 510, 275, "7421"),
        progress: Progress { percentage: 65, elapsed: "4h 30m", remaining: "2h 15m", distance: miles( 3451, 2243, 1208) },
        history: history( 88, 8, &BA123_HISTORY),
    },
    FlightDetails {
        callsign: "BA458",
        flight_number: "BA 458",
        airline: BRITISH_AIRWAYS,
        aircraft: AircraftInfo { kind: "Airbus A320", registration: "G-EUYT", age: "8 years", icao24: "abc123" },
        origin: heathrow( "5", "A10"),
        destination: AirportStop {
            iata: "CDG", icao: "LFPG", name: "Charles de Gaulle", city: "Paris", country: "France",
            terminal: "2E", gate: "K45", lat: 49.0097, lng: 2.5479
        },
        times: times( "2024-01-15T14:15:00Z", "2024-01-15T16:35:00Z", "2024-01-15T14:18:00Z", "2024-01-15T16:38:00Z"),
        status: en_route( "En Route", 3, true),
        position: position( 51.15, -0.18, 36000, 450, 135, "5523"),
        progress: Progress { percentage: 67, elapsed: "0h 52m", remaining: "1h 10m", distance: miles( 214, 143, 71) },
        history: history( 92, 5, &[]),
    },
    FlightDetails {
        callsign: "BA217",
        flight_number: "BA 217",
        airline: BRITISH_AIRWAYS,
        aircraft: AircraftInfo { kind: "Boeing 777-200", registration: "G-VIIA", age: "12 years", icao24: "def456" },
        origin: heathrow( "5", "C44"),
        destination: AirportStop {
            iata: "IAD", icao: "KIAD", name: "Washington Dulles", city: "Washington", country: "United States",
            terminal: "B", gate: "12", lat: 38.9531, lng: -77.4565
        },
        times: times( "2024-01-15T10:30:00Z", "2024-01-15T14:15:00Z", "2024-01-15T10:32:00Z", "2024-01-15T14:12:00Z"),
        status: en_route( "En Route", 0, true),
        position: position( 51.8, -1.2, 38000, 510, 285, "6142"),
        progress: Progress { percentage: 45, elapsed: "3h 15m", remaining: "2h 45m", distance: miles( 3665, 1649, 2016) },
        history: history( 85, 12, &[]),
    },
    FlightDetails {
        callsign: "VS3",
        flight_number: "VS 3",
        airline: VIRGIN_ATLANTIC,
        aircraft: AircraftInfo { kind: "Airbus A350-1000", registration: "G-VLUX", age: "3 years", icao24: "ghi789" },
        origin: heathrow( "3", "B36"),
        destination: kennedy( "4", "B25"),
        times: times( "2024-01-15T11:00:00Z", "2024-01-15T14:15:00Z", "2024-01-15T11:15:00Z", "2024-01-15T14:30:00Z"),
        status: en_route( "En Route - Delayed", 15, false),
        position: position( 52.1, -2.5, 40000, 520, 270, "4521"),
        progress: Progress { percentage: 35, elapsed: "2h 45m", remaining: "3h 15m", distance: miles( 3451, 1208, 2243) },
        history: history( 78, 18, &[]),
    },
];
