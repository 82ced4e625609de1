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
use std::{net::SocketAddr, sync::Arc};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flightpulse_server::{self as server, ServerConfig};
use flightpulse_flights::{
    FlightsConfig, DEFAULT_CONFIG_FILE,
    aggregator::Aggregator, cache::{KvStore, MemKvStore}, flights_service,
    opensky::{FlightProvider, OfflineProvider, OpenSkyProvider}
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "serve UK airports and live flight positions as JSON API")]
pub struct Args {
    /// socket address to listen on (overrides server.ron)
    #[arg(short, long)]
    pub addr: Option<SocketAddr>,

    /// do not cache upstream results
    #[arg(long)]
    pub no_cache: bool,

    /// never call the upstream service, always serve fallback flights
    #[arg(long)]
    pub offline: bool,
}

#[tokio::main]
async fn main()->Result<()> {
    // use RUST_LOG to set max level
    let _ = tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();

    let mut server_config: ServerConfig = server::load_config_or_default("server.ron")?;
    if let Some(addr) = args.addr {
        server_config.sock_addr = addr;
    }

    let mut flights_config = FlightsConfig::load( DEFAULT_CONFIG_FILE)?;
    if args.no_cache {
        flights_config.use_cache = false;
    }

    let provider: Arc<dyn FlightProvider> = if args.offline {
        info!("offline mode, serving fallback flights only");
        Arc::new( OfflineProvider)
    } else {
        Arc::new( OpenSkyProvider::new( &flights_config)?)
    };
    let store: Arc<dyn KvStore> = Arc::new( MemKvStore::new());

    let aggregator = Arc::new( Aggregator::from_config( &flights_config, provider, Some(store)));
    let router = flights_service::router( aggregator.clone());

    server::serve( &server_config, router, server::ctrl_c()).await?;

    aggregator.settle().await;
    Ok(())
}
