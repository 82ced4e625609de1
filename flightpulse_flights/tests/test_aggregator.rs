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

use std::{sync::{Arc, atomic::{AtomicUsize, Ordering}}, time::Duration};
use async_trait::async_trait;
use axum::{routing::get, Router, http::StatusCode};
use serde_json::json;

use flightpulse_flights::{
    FlightsConfig, FlightsError, FlightSource, Result,
    aggregator::Aggregator, cache::{FlightCache, KvStore, MemKvStore},
    opensky::{FlightProvider, OfflineProvider, OpenSkyProvider, RawState}
};

// run with "cargo test -p flightpulse_flights --test test_aggregator -- --nocapture"

fn sample_states ()->Vec<RawState> {
    vec![
        RawState {
            icao24: "4ca7b5".to_string(), callsign: Some("BAW123".to_string()),
            longitude: Some(-4.8), latitude: Some(53.2), baro_altitude: Some(11000.0), velocity: Some(262.0),
            ..Default::default()
        },
        RawState {
            icao24: "4ca7b6".to_string(), callsign: None,
            longitude: Some(-1.0), latitude: Some(52.0),
            ..Default::default()
        },
    ]
}

struct CountingProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl FlightProvider for CountingProvider {
    async fn fetch_states (&self)->Result<Vec<RawState>> {
        self.calls.fetch_add( 1, Ordering::SeqCst);
        Ok( sample_states())
    }
}

struct FailingProvider;

#[async_trait]
impl FlightProvider for FailingProvider {
    async fn fetch_states (&self)->Result<Vec<RawState>> {
        Err( FlightsError::UpstreamStatus(503))
    }
}

struct PanickingProvider;

#[async_trait]
impl FlightProvider for PanickingProvider {
    async fn fetch_states (&self)->Result<Vec<RawState>> {
        panic!("provider bug")
    }
}

/// a store that is always unavailable
struct BrokenStore;

#[async_trait]
impl KvStore for BrokenStore {
    async fn get (&self, _key: &str)->Result<Option<String>> {
        Err( FlightsError::Cache("store unavailable".to_string()))
    }
    async fn put (&self, _key: &str, _value: String, _ttl: Duration)->Result<()> {
        Err( FlightsError::Cache("store unavailable".to_string()))
    }
}

fn aggregator_with (provider: Arc<dyn FlightProvider>, store: Option<Arc<dyn KvStore>>)->Aggregator {
    Aggregator::from_config( &FlightsConfig::default(), provider, store)
}

#[tokio::test]
async fn test_live_batch() {
    let agg = aggregator_with( Arc::new( CountingProvider { calls: AtomicUsize::new(0) }), None);
    let batch = agg.get_live_flights().await;

    assert_eq!( batch.source, FlightSource::Live);
    assert_eq!( batch.count, 1);
    assert_eq!( batch.flights[0].callsign, "BAW123");
    assert!( !batch.from_cache);
    assert!( batch.note.is_none());
}

#[tokio::test]
async fn test_cached_within_ttl() {
    let provider = Arc::new( CountingProvider { calls: AtomicUsize::new(0) });
    let store: Arc<dyn KvStore> = Arc::new( MemKvStore::new());
    let agg = aggregator_with( provider.clone(), Some(store));

    let first = agg.get_live_flights().await;
    agg.settle().await;
    let second = agg.get_live_flights().await;

    assert_eq!( provider.calls.load( Ordering::SeqCst), 1);
    assert_eq!( second.source, first.source);
    assert_eq!( second.flights, first.flights);
    assert_eq!( second.timestamp, first.timestamp);
    assert!( !first.from_cache);
    assert!( second.from_cache);
}

#[tokio::test]
async fn test_expired_cache_refetches() {
    let provider = Arc::new( CountingProvider { calls: AtomicUsize::new(0) });
    let config = FlightsConfig { cache_ttl: Duration::from_millis(50), ..FlightsConfig::default() };
    let store: Arc<dyn KvStore> = Arc::new( MemKvStore::new());
    let agg = Aggregator::from_config( &config, provider.clone(), Some(store));

    agg.get_live_flights().await;
    agg.settle().await;
    tokio::time::sleep( Duration::from_millis(100)).await;

    let batch = agg.get_live_flights().await;
    assert!( !batch.from_cache);
    assert_eq!( provider.calls.load( Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_cache_disabled() {
    let provider = Arc::new( CountingProvider { calls: AtomicUsize::new(0) });
    let config = FlightsConfig { use_cache: false, ..FlightsConfig::default() };
    let store: Arc<dyn KvStore> = Arc::new( MemKvStore::new());
    let agg = Aggregator::from_config( &config, provider.clone(), Some(store));
    assert!( !agg.has_cache());

    agg.get_live_flights().await;
    agg.settle().await;
    agg.get_live_flights().await;
    assert_eq!( provider.calls.load( Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_fallback_on_failure() {
    let providers: Vec<Arc<dyn FlightProvider>> = vec![ Arc::new(FailingProvider), Arc::new(OfflineProvider), Arc::new(PanickingProvider) ];

    for provider in providers {
        let store: Arc<dyn KvStore> = Arc::new( MemKvStore::new());
        let agg = aggregator_with( provider, Some(store.clone()));
        let batch = agg.get_live_flights().await;
        agg.settle().await;

        assert_eq!( batch.source, FlightSource::Fallback);
        assert_eq!( batch.count, 6);
        assert_eq!( batch.count, batch.flights.len());
        assert!( batch.note.is_some());

        // fallback batches are not cached
        assert!( store.get("flights-uk").await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_broken_cache_is_ignored() {
    let provider = Arc::new( CountingProvider { calls: AtomicUsize::new(0) });
    let agg = aggregator_with( provider.clone(), Some( Arc::new(BrokenStore)));

    let batch = agg.get_live_flights().await;
    agg.settle().await;
    assert_eq!( batch.source, FlightSource::Live);

    let batch = agg.get_live_flights().await;
    assert_eq!( batch.source, FlightSource::Live);
    assert_eq!( provider.calls.load( Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_corrupted_cache_entry() {
    let store: Arc<dyn KvStore> = Arc::new( MemKvStore::new());
    store.put( "flights-uk", "{ not a batch".to_string(), Duration::from_secs(60)).await.unwrap();

    let cache = FlightCache::new( store.clone(), "flights-uk", Duration::from_secs(15));
    assert!( matches!( cache.get().await, Err(FlightsError::Cache(_))));

    let provider = Arc::new( CountingProvider { calls: AtomicUsize::new(0) });
    let agg = aggregator_with( provider.clone(), Some(store));
    let batch = agg.get_live_flights().await;
    assert_eq!( batch.source, FlightSource::Live);
    assert_eq!( provider.calls.load( Ordering::SeqCst), 1);
}

//--- upstream failures against a local state vector server

async fn spawn_upstream ()->String {
    let router = Router::new()
        .route( "/ok", get( || async {
            json!({ "time": 1700000001, "states": [
                ["4ca7b5", "BAW123  ", "United Kingdom", 1700000000, 1700000001, -4.8, 53.2, 11000.0, false,
                 262.0, 275.0, 0.0, null, 11200.0, "7421", false, 0]
            ]}).to_string()
        }))
        .route( "/empty", get( || async { "{\"time\": 1700000001, \"states\": null}" }))
        .route( "/error", get( || async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream down") }))
        .route( "/malformed", get( || async { "{\"states\": [" }))
        .route( "/slow", get( || async {
            tokio::time::sleep( Duration::from_secs(3)).await;
            "{}"
        }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn( async move { axum::serve( listener, router).await.unwrap() });
    format!("http://{addr}")
}

fn upstream_aggregator (base: &str, path: &str)->Aggregator {
    let config = FlightsConfig {
        upstream_url: format!("{base}{path}"),
        request_timeout: Duration::from_millis(300),
        use_cache: false,
        ..FlightsConfig::default()
    };
    let provider = Arc::new( OpenSkyProvider::new( &config).unwrap());
    Aggregator::from_config( &config, provider, None)
}

#[tokio::test]
async fn test_upstream() {
    let base = spawn_upstream().await;

    let agg = upstream_aggregator( &base, "/ok");
    let batch = agg.get_live_flights().await;
    assert_eq!( batch.source, FlightSource::Live);
    assert_eq!( batch.count, 1);
    assert_eq!( batch.flights[0].altitude, 36089);

    let batch = upstream_aggregator( &base, "/empty").get_live_flights().await;
    assert_eq!( batch.source, FlightSource::Live);
    assert_eq!( batch.count, 0);

    match upstream_aggregator( &base, "/error").fetch_live().await {
        Err(e) => { assert!( e.is_upstream()); assert!( matches!( e, FlightsError::UpstreamStatus(500))) }
        Ok(_) => panic!("expected status error")
    }
    match upstream_aggregator( &base, "/malformed").fetch_live().await {
        Err(e) => assert!( matches!( e, FlightsError::UpstreamPayload(_))),
        Ok(_) => panic!("expected payload error")
    }
    match upstream_aggregator( &base, "/slow").fetch_live().await {
        Err(e) => assert!( matches!( e, FlightsError::UpstreamTransport(_))),
        Ok(_) => panic!("expected timeout")
    }

    for path in ["/error", "/malformed", "/slow"] {
        let batch = upstream_aggregator( &base, path).get_live_flights().await;
        assert_eq!( batch.source, FlightSource::Fallback, "{path}");
        assert!( !batch.flights.is_empty());
    }
}
