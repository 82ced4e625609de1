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

///! common utility functions for network operations

use std::time::Duration;
use reqwest::{header::{HeaderMap,HeaderValue,ACCEPT,USER_AGENT}, Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::define_error;

define_error!{ pub NetError =
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    StatusError(u16) : "response status {0}",
    NotFoundError(String) : "not found {0}",
    ParseError(String) : "parse error: {0}"
}

pub type Result<T> = std::result::Result<T, NetError>;

/// create a client with given per-request timeout and user agent
pub fn build_client (timeout: Duration, user_agent: &str)->Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert( ACCEPT, HeaderValue::from_static("application/json"));

    Ok( Client::builder()
        .timeout( timeout)
        .user_agent( user_agent)
        .default_headers( headers)
        .build()? )
}

/// HTTP GET a JSON document from `url` with the provided query parameters.
/// Anything but a 200 response is reported as an error, as is a body that does not parse as `T`
pub async fn get_json<T,K,V> (client: &Client, url: &str, query: &[(K,V)]) -> Result<T>
    where T: DeserializeOwned, K: serde::Serialize, V: serde::Serialize
{
    let response = client.get( url).query( query).send().await?;

    match response.status() {
        StatusCode::OK => {
            let bytes = response.bytes().await?;
            serde_json::from_slice::<T>( &bytes).map_err( |e| NetError::ParseError( e.to_string()))
        }
        StatusCode::NOT_FOUND => {
            Err( NetError::NotFoundError( url.to_string()))
        }
        other => {
            Err( NetError::StatusError( other.as_u16()))
        }
    }
}
