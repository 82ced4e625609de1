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

///! the static table of UK and Crown dependency airports

use serde::Serialize;

#[derive(Serialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum AirportType {
    International,
    Regional,
}

#[derive(Serialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum AirportSize {
    Large,
    Medium,
    Small,
}

#[derive(Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct Airport {
    pub iata: &'static str,
    pub icao: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub elevation: i32, // [ft]
    pub timezone: &'static str,
    pub terminals: &'static [&'static str],
    pub airlines: &'static [&'static str],
    #[serde(rename="type")]
    pub kind: AirportType,
    pub size: AirportSize,
    pub runways: u8,
    pub annual_passengers: u64,
}

impl Airport {
    /// case insensitive substring match on codes, name and city. `query` has to be lowercase
    pub fn matches (&self, query: &str)->bool {
        [self.iata, self.icao, self.name, self.city].iter().any( |s| s.to_lowercase().contains( query))
    }
}

pub fn all_airports ()->&'static [Airport] { &AIRPORTS }

/// exact (uppercase) IATA code lookup
pub fn find_by_iata (iata: &str)->Option<&'static Airport> {
    AIRPORTS.iter().find( |a| a.iata == iata)
}

/// exact (uppercase) ICAO code lookup
pub fn find_by_icao (icao: &str)->Option<&'static Airport> {
    AIRPORTS.iter().find( |a| a.icao == icao)
}

/// all airports matching the lowercase `query`, in table order
pub fn search (query: &str)->Vec<&'static Airport> {
    AIRPORTS.iter().filter( |a| a.matches( query)).collect()
}

static AIRPORTS: [Airport;26] = [
    Airport {
        iata: "LHR", icao: "EGLL", name: "London Heathrow Airport", city: "London", country: "United Kingdom",
        lat: 51.4700, lng: -0.4543, elevation: 83, timezone: "Europe/London",
        terminals: &["Terminal 2", "Terminal 3", "Terminal 4", "Terminal 5"],
        airlines: &["British Airways", "Virgin Atlantic", "American Airlines", "United Airlines"],
        kind: AirportType::International, size: AirportSize::Large, runways: 2, annual_passengers: 80_000_000
    },
    Airport {
        iata: "LGW", icao: "EGKK", name: "London Gatwick Airport", city: "London", country: "United Kingdom",
        lat: 51.1537, lng: -0.1821, elevation: 202, timezone: "Europe/London",
        terminals: &["North Terminal", "South Terminal"],
        airlines: &["easyJet", "British Airways", "Norwegian", "WestJet"],
        kind: AirportType::International, size: AirportSize::Large, runways: 2, annual_passengers: 46_000_000
    },
    Airport {
        iata: "STN", icao: "EGSS", name: "London Stansted Airport", city: "London", country: "United Kingdom",
        lat: 51.8860, lng: 0.2389, elevation: 348, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Ryanair", "Jet2", "easyJet"],
        kind: AirportType::International, size: AirportSize::Large, runways: 1, annual_passengers: 28_000_000
    },
    Airport {
        iata: "LTN", icao: "EGGW", name: "London Luton Airport", city: "London", country: "United Kingdom",
        lat: 51.8747, lng: -0.3683, elevation: 526, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Wizz Air", "easyJet", "Ryanair", "TUI"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 18_000_000
    },
    Airport {
        iata: "LCY", icao: "EGLC", name: "London City Airport", city: "London", country: "United Kingdom",
        lat: 51.5048, lng: 0.0495, elevation: 19, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["British Airways", "KLM", "Lufthansa"],
        kind: AirportType::International, size: AirportSize::Small, runways: 1, annual_passengers: 5_000_000
    },
    Airport {
        iata: "SEN", icao: "EGMC", name: "London Southend Airport", city: "London", country: "United Kingdom",
        lat: 51.5714, lng: 0.6956, elevation: 49, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Ryanair"],
        kind: AirportType::International, size: AirportSize::Small, runways: 1, annual_passengers: 2_000_000
    },
    Airport {
        iata: "MAN", icao: "EGCC", name: "Manchester Airport", city: "Manchester", country: "United Kingdom",
        lat: 53.3537, lng: -2.2750, elevation: 257, timezone: "Europe/London",
        terminals: &["Terminal 1", "Terminal 2", "Terminal 3"],
        airlines: &["Ryanair", "easyJet", "TUI", "Jet2", "Emirates"],
        kind: AirportType::International, size: AirportSize::Large, runways: 2, annual_passengers: 29_000_000
    },
    Airport {
        iata: "BHX", icao: "EGBB", name: "Birmingham Airport", city: "Birmingham", country: "United Kingdom",
        lat: 52.4539, lng: -1.7480, elevation: 327, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Ryanair", "TUI", "Jet2", "Emirates"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 12_500_000
    },
    Airport {
        iata: "EDI", icao: "EGPH", name: "Edinburgh Airport", city: "Edinburgh", country: "United Kingdom",
        lat: 55.9508, lng: -3.3615, elevation: 135, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Ryanair", "easyJet", "British Airways", "Loganair"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 14_700_000
    },
    Airport {
        iata: "GLA", icao: "EGPF", name: "Glasgow Airport", city: "Glasgow", country: "United Kingdom",
        lat: 55.8719, lng: -4.4331, elevation: 26, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["easyJet", "TUI", "Jet2", "Ryanair"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 9_700_000
    },
    Airport {
        iata: "BRS", icao: "EGGD", name: "Bristol Airport", city: "Bristol", country: "United Kingdom",
        lat: 51.3827, lng: -2.7190, elevation: 622, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["easyJet", "TUI", "Ryanair", "Jet2"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 9_000_000
    },
    Airport {
        iata: "LPL", icao: "EGGP", name: "Liverpool John Lennon Airport", city: "Liverpool", country: "United Kingdom",
        lat: 53.3336, lng: -2.8497, elevation: 80, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Ryanair", "easyJet", "Wizz Air"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 5_000_000
    },
    Airport {
        iata: "NCL", icao: "EGNT", name: "Newcastle Airport", city: "Newcastle upon Tyne", country: "United Kingdom",
        lat: 55.0375, lng: -1.6917, elevation: 266, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["easyJet", "Ryanair", "TUI", "Jet2"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 5_400_000
    },
    Airport {
        iata: "LBA", icao: "EGNM", name: "Leeds Bradford Airport", city: "Leeds", country: "United Kingdom",
        lat: 53.8659, lng: -1.6606, elevation: 681, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Jet2", "Ryanair", "Wizz Air"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 4_000_000
    },
    Airport {
        iata: "EMA", icao: "EGNX", name: "East Midlands Airport", city: "Nottingham", country: "United Kingdom",
        lat: 52.8311, lng: -1.3281, elevation: 306, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Ryanair", "TUI", "Jet2"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 4_900_000
    },
    Airport {
        iata: "BFS", icao: "EGAA", name: "Belfast International Airport", city: "Belfast", country: "United Kingdom",
        lat: 54.6575, lng: -6.2158, elevation: 268, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["easyJet", "Jet2", "Ryanair", "TUI"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 2, annual_passengers: 6_300_000
    },
    Airport {
        iata: "BHD", icao: "EGAC", name: "George Best Belfast City Airport", city: "Belfast", country: "United Kingdom",
        lat: 54.6181, lng: -5.8725, elevation: 15, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["British Airways", "Aer Lingus", "Loganair"],
        kind: AirportType::Regional, size: AirportSize::Small, runways: 1, annual_passengers: 2_500_000
    },
    Airport {
        iata: "ABZ", icao: "EGPD", name: "Aberdeen Airport", city: "Aberdeen", country: "United Kingdom",
        lat: 57.2019, lng: -2.1978, elevation: 215, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["British Airways", "Loganair", "easyJet", "KLM"],
        kind: AirportType::International, size: AirportSize::Medium, runways: 1, annual_passengers: 3_100_000
    },
    Airport {
        iata: "CWL", icao: "EGFF", name: "Cardiff Airport", city: "Cardiff", country: "United Kingdom",
        lat: 51.3967, lng: -3.3433, elevation: 220, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["TUI", "Ryanair", "Vueling"],
        kind: AirportType::International, size: AirportSize::Small, runways: 1, annual_passengers: 1_600_000
    },
    Airport {
        iata: "SOU", icao: "EGHI", name: "Southampton Airport", city: "Southampton", country: "United Kingdom",
        lat: 50.9503, lng: -1.3568, elevation: 44, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["British Airways", "Loganair", "Aurigny"],
        kind: AirportType::Regional, size: AirportSize::Small, runways: 1, annual_passengers: 2_000_000
    },
    Airport {
        iata: "EXT", icao: "EGTE", name: "Exeter Airport", city: "Exeter", country: "United Kingdom",
        lat: 50.7344, lng: -3.4139, elevation: 102, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Ryanair", "TUI"],
        kind: AirportType::Regional, size: AirportSize::Small, runways: 1, annual_passengers: 1_000_000
    },
    Airport {
        iata: "NWI", icao: "EGSH", name: "Norwich Airport", city: "Norwich", country: "United Kingdom",
        lat: 52.6758, lng: 1.2828, elevation: 117, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["KLM", "Loganair"],
        kind: AirportType::Regional, size: AirportSize::Small, runways: 1, annual_passengers: 500_000
    },
    Airport {
        iata: "INV", icao: "EGPE", name: "Inverness Airport", city: "Inverness", country: "United Kingdom",
        lat: 57.5425, lng: -4.0475, elevation: 31, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["British Airways", "easyJet", "Loganair", "KLM"],
        kind: AirportType::Regional, size: AirportSize::Small, runways: 1, annual_passengers: 1_000_000
    },
    Airport {
        iata: "JER", icao: "EGJJ", name: "Jersey Airport", city: "St. Helier", country: "Jersey",
        lat: 49.2078, lng: -2.1956, elevation: 277, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["British Airways", "easyJet", "Blue Islands"],
        kind: AirportType::Regional, size: AirportSize::Small, runways: 1, annual_passengers: 1_700_000
    },
    Airport {
        iata: "GCI", icao: "EGJB", name: "Guernsey Airport", city: "St. Peter Port", country: "Guernsey",
        lat: 49.4350, lng: -2.6020, elevation: 336, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["Aurigny", "Blue Islands"],
        kind: AirportType::Regional, size: AirportSize::Small, runways: 1, annual_passengers: 900_000
    },
    Airport {
        iata: "IOM", icao: "EGNS", name: "Isle of Man Airport", city: "Douglas", country: "Isle of Man",
        lat: 54.0833, lng: -4.6239, elevation: 52, timezone: "Europe/London",
        terminals: &["Main Terminal"],
        airlines: &["easyJet", "Loganair", "British Airways"],
        kind: AirportType::Regional, size: AirportSize::Small, runways: 1, annual_passengers: 850_000
    },
];
