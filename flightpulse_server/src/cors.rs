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

///! permissive CORS for a read-only JSON API

use axum::{body::Body, extract::Request, middleware::Next, response::{IntoResponse, Response}};
use http::{header::{self, HeaderMap, HeaderValue}, Method, StatusCode};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// set the headers each of our responses carries. Existing values are overwritten
pub fn add_cors_headers (headers: &mut HeaderMap) {
    headers.insert( header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert( header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert( header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    headers.insert( header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
}

/// `axum::middleware::from_fn` compatible middleware. Preflight requests are answered here
/// with an empty body and never reach the router
pub async fn cors_middleware (req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        (StatusCode::OK, Body::empty()).into_response()
    } else {
        next.run(req).await
    };

    add_cors_headers( response.headers_mut());
    response
}
