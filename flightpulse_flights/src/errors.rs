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
use thiserror::Error;
use flightpulse_common::{config::ConfigError, net::NetError};

pub type Result<T> = std::result::Result<T,FlightsError>;

#[derive(Error,Debug)]
pub enum FlightsError {

    //--- upstream failures (recovered by the aggregator)

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("upstream transport error: {0}")]
    UpstreamTransport(String),

    #[error("malformed upstream payload: {0}")]
    UpstreamPayload(String),

    //--- cache failures (logged and ignored)

    #[error("cache error: {0}")]
    Cache(String),

    //--- client input errors (reported to the caller)

    #[error("{} parameter is required", .0.label())]
    MissingParameter(LookupKey),

    #[error("{} not found", .0.subject())]
    NotFound(LookupKey, String),

    #[error("config error: {0}")]
    Config( #[from] ConfigError),
}

impl FlightsError {
    pub fn is_upstream (&self)->bool {
        matches!( self, FlightsError::UpstreamStatus(_) | FlightsError::UpstreamTransport(_) | FlightsError::UpstreamPayload(_))
    }

    pub fn is_client_error (&self)->bool {
        self.status_code().is_client_error()
    }

    /// the HTTP status we answer with if this error ends a request
    pub fn status_code (&self)->StatusCode {
        match self {
            FlightsError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            FlightsError::NotFound(..) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// the query parameter a client error refers to
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum LookupKey {
    Callsign,
    Iata,
    Icao,
}

impl LookupKey {
    pub fn label (&self)->&'static str {
        match self {
            LookupKey::Callsign => "Callsign",
            LookupKey::Iata => "IATA",
            LookupKey::Icao => "ICAO",
        }
    }

    /// what a lookup by this key is looking for
    pub fn subject (&self)->&'static str {
        match self {
            LookupKey::Callsign => "Flight",
            LookupKey::Iata | LookupKey::Icao => "Airport",
        }
    }
}

impl From<NetError> for FlightsError {
    fn from (e: NetError)->Self {
        match e {
            NetError::StatusError(status) => FlightsError::UpstreamStatus(status),
            NetError::NotFoundError(_) => FlightsError::UpstreamStatus(404),
            NetError::ParseError(msg) => FlightsError::UpstreamPayload(msg),
            NetError::HttpError(e) if e.is_decode() => FlightsError::UpstreamPayload(e.to_string()),
            other => FlightsError::UpstreamTransport(other.to_string()),
        }
    }
}

macro_rules! payload_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::FlightsError::UpstreamPayload( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use payload_error;

pub fn cache_error (msg: impl ToString)->FlightsError {
    FlightsError::Cache(msg.to_string())
}
