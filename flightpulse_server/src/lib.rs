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
use std::{future::Future, net::{IpAddr, Ipv4Addr, SocketAddr}};

use axum::Router;
use serde::{Deserialize,Serialize};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::info;

use flightpulse_common::define_load_config;

pub mod errors;
use errors::{ServerResult,bind_error};

pub mod cors;
pub mod response;

define_load_config!{}

type Result<T> = ServerResult<T>;

pub const DEFAULT_PORT: u16 = 8787;

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct ServerConfig {
    pub sock_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default()->Self {
        ServerConfig { sock_addr: SocketAddr::new( IpAddr::V4( Ipv4Addr::UNSPECIFIED), DEFAULT_PORT) }
    }
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}", self.sock_addr)
    }
}

/// wrap a router with the layers every API we serve needs: request tracing, panic-to-500 conversion
/// and CORS headers (which also answers `OPTIONS` requests for any path, including unmatched ones)
pub fn with_api_layers (router: Router)->Router {
    router
        .layer( CatchPanicLayer::custom( response::panic_response))
        .layer( axum::middleware::from_fn( cors::cors_middleware))
        .layer( TraceLayer::new_for_http())
}

/// bind the configured socket address and serve `router` until `shutdown` completes
pub async fn serve<F> (config: &ServerConfig, router: Router, shutdown: F)->Result<()> where F: Future<Output=()> + Send + 'static {
    let listener = tokio::net::TcpListener::bind( config.sock_addr).await
        .map_err( |e| bind_error( format!("{}: {e}", config.sock_addr)))?;
    info!("serving on {}", config.url());

    axum::serve( listener, router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown( shutdown)
        .await?;
    Ok(())
}

/// resolves on Ctrl-C. Use as graceful shutdown future for `serve(..)`
pub async fn ctrl_c () {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl-C, shutting down");
    }
}
