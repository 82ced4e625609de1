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

///! JSON response construction

use std::any::Any;
use axum::{body::Body, response::{IntoResponse, Response}, Json};
use http::{header::{self, HeaderValue}, StatusCode};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use flightpulse_common::datetime::EpochMillis;

/// `Cache-Control` policies of our routes
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum CachePolicy {
    NoHeader,
    MaxAge(u32),
}

impl CachePolicy {
    pub fn header_value (&self)->Option<HeaderValue> {
        match self {
            CachePolicy::NoHeader => None,
            CachePolicy::MaxAge(secs) => HeaderValue::from_str( &format!("public, max-age={secs}")).ok()
        }
    }
}

/// serialize `data` into a JSON response with given status and cache policy
pub fn json_response<T: Serialize> (status: StatusCode, data: &T, cache: CachePolicy)->Response {
    let mut response = (status, Json(data)).into_response();
    if let Some(hv) = cache.header_value() {
        response.headers_mut().insert( header::CACHE_CONTROL, hv);
    }
    response
}

pub fn ok_json<T: Serialize> (data: &T, cache: CachePolicy)->Response {
    json_response( StatusCode::OK, data, cache)
}

/// `CatchPanicLayer` handler. Reports the panic message as `{error, timestamp}` with a 500 status
pub fn panic_response (err: Box<dyn Any + Send + 'static>)->Response<Body> {
    let msg = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown error".to_string()
    };
    error!("request handler failed: {msg}");

    let body = json!({ "error": msg, "timestamp": EpochMillis::now() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
