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

///! short lived caching of flight batches in a key/value store with TTL semantics

use std::{sync::Arc, time::Duration};
use async_trait::async_trait;
use dashmap::DashMap;
use tokio::time::Instant;

use crate::{FlightBatch, FlightsConfig, errors::{cache_error, Result}};

/// the store abstraction. Expired entries have to be reported as absent
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get (&self, key: &str)->Result<Option<String>>;
    async fn put (&self, key: &str, value: String, ttl: Duration)->Result<()>;
}

/// in-process store. Expired entries are not removed, they are just not returned anymore and
/// get replaced by the next put for the same key
#[derive(Debug,Default)]
pub struct MemKvStore {
    entries: DashMap<String,(String,Instant)>,
}

impl MemKvStore {
    pub fn new ()->Self { MemKvStore::default() }

    pub fn len (&self)->usize { self.entries.len() }
}

#[async_trait]
impl KvStore for MemKvStore {
    async fn get (&self, key: &str)->Result<Option<String>> {
        match self.entries.get( key) {
            Some(e) => {
                let (value, expiry) = e.value();
                if Instant::now() < *expiry { Ok( Some( value.clone())) } else { Ok(None) }
            }
            None => Ok(None)
        }
    }

    async fn put (&self, key: &str, value: String, ttl: Duration)->Result<()> {
        let expiry = Instant::now().checked_add( ttl).ok_or_else( || cache_error( format!("invalid ttl {ttl:?}")))?;
        self.entries.insert( key.to_string(), (value, expiry));
        Ok(())
    }
}

/// flight batches stored as JSON under a fixed key
#[derive(Clone)]
pub struct FlightCache {
    store: Arc<dyn KvStore>,
    key: String,
    ttl: Duration,
}

impl FlightCache {
    pub fn new (store: Arc<dyn KvStore>, key: impl ToString, ttl: Duration)->Self {
        FlightCache { store, key: key.to_string(), ttl }
    }

    pub fn from_config (store: Arc<dyn KvStore>, config: &FlightsConfig)->Self {
        FlightCache::new( store, &config.cache_key, config.cache_ttl)
    }

    pub fn key (&self)->&str { &self.key }

    /// the fresh batch if there is one. Returned batches are marked as coming from the cache
    pub async fn get (&self)->Result<Option<FlightBatch>> {
        match self.store.get( &self.key).await? {
            Some(json) => {
                let mut batch: FlightBatch = serde_json::from_str( &json).map_err( |e| cache_error( format!("corrupted entry: {e}")))?;
                batch.from_cache = true;
                Ok( Some(batch))
            }
            None => Ok(None)
        }
    }

    pub async fn put (&self, batch: &FlightBatch)->Result<()> {
        let json = serde_json::to_string( batch).map_err( |e| cache_error(e))?;
        self.store.put( &self.key, json, self.ttl).await
    }
}
