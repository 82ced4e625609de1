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

///! airline and origin hub lookup based on the ICAO airline designator that starts most callsigns

use std::collections::HashMap;
use lazy_static::lazy_static;

pub const UNKNOWN_AIRLINE: &str = "Unknown";

const AIRLINES: [(&str,&str);27] = [
    ("BAW", "British Airways"),
    ("EZY", "easyJet"),
    ("EZS", "easyJet Switzerland"),
    ("VIR", "Virgin Atlantic"),
    ("RYR", "Ryanair"),
    ("RUK", "Ryanair UK"),
    ("TOM", "TUI Airways"),
    ("EXS", "Jet2"),
    ("LOG", "Loganair"),
    ("BEE", "Flybe"),
    ("SHT", "BA Shuttle"),
    ("UAE", "Emirates"),
    ("QTR", "Qatar Airways"),
    ("AFR", "Air France"),
    ("KLM", "KLM"),
    ("DLH", "Lufthansa"),
    ("SWR", "Swiss"),
    ("ACA", "Air Canada"),
    ("AAL", "American Airlines"),
    ("UAL", "United Airlines"),
    ("DAL", "Delta Air Lines"),
    ("THY", "Turkish Airlines"),
    ("SAS", "Scandinavian Airlines"),
    ("FIN", "Finnair"),
    ("IBE", "Iberia"),
    ("TAP", "TAP Portugal"),
    ("AEE", "Aegean Airlines"),
];

const HUBS: [(&str,&str);7] = [
    ("BAW", "LHR"),
    ("VIR", "LHR"),
    ("EZY", "LGW"),
    ("TOM", "LGW"),
    ("RYR", "STN"),
    ("EXS", "LBA"),
    ("LOG", "EDI"),
];

lazy_static! {
    static ref AIRLINE_MAP: HashMap<&'static str,&'static str> = HashMap::from( AIRLINES);
    static ref HUB_MAP: HashMap<&'static str,&'static str> = HashMap::from( HUBS);
}

/// the uppercase first `n` chars of a trimmed callsign, or None if the callsign is empty
fn prefix (callsign: &str, n: usize)->Option<String> {
    let cs = callsign.trim();
    if cs.is_empty() { None } else { Some( cs.chars().take(n).collect::<String>().to_uppercase()) }
}

/// airline name for callsign. Unknown designators resolve to the first two callsign chars
pub fn resolve_airline (callsign: Option<&str>)->String {
    match callsign.and_then( |cs| prefix( cs, 3)) {
        Some(p3) => match AIRLINE_MAP.get( p3.as_str()) {
            Some(name) => name.to_string(),
            None => p3.chars().take(2).collect()
        }
        None => UNKNOWN_AIRLINE.to_string()
    }
}

/// origin hub for callsign, `primary_hub` if the designator has no known hub (or there is no callsign)
pub fn resolve_origin_hub (callsign: Option<&str>, primary_hub: &str)->String {
    callsign
        .and_then( |cs| prefix( cs, 3))
        .and_then( |p3| HUB_MAP.get( p3.as_str()).map( |hub| hub.to_string()))
        .unwrap_or_else( || primary_hub.to_string())
}

/// callsign resolution with a configured primary hub
#[derive(Debug,Clone)]
pub struct CallsignResolver {
    primary_hub: String,
}

impl CallsignResolver {
    pub fn new (primary_hub: impl ToString)->Self {
        CallsignResolver { primary_hub: primary_hub.to_string() }
    }

    pub fn airline (&self, callsign: Option<&str>)->String { resolve_airline( callsign) }

    pub fn origin_hub (&self, callsign: Option<&str>)->String { resolve_origin_hub( callsign, &self.primary_hub) }
}
