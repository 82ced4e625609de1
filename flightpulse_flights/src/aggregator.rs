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

///! the live flight pipeline: cache check, upstream fetch, normalization, cache write, fallback

use std::{panic::AssertUnwindSafe, sync::Arc};
use futures::FutureExt;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

use flightpulse_common::datetime::EpochMillis;
use crate::{
    FlightBatch, FlightsConfig, FlightsError, Result,
    cache::{FlightCache, KvStore}, fallback::fallback_batch, normalize::Normalizer, opensky::FlightProvider
};

pub struct Aggregator {
    provider: Arc<dyn FlightProvider>,
    normalizer: Normalizer,
    cache: Option<FlightCache>,
    cache_writes: TaskTracker,
}

impl Aggregator {
    pub fn new (provider: Arc<dyn FlightProvider>, normalizer: Normalizer, cache: Option<FlightCache>)->Self {
        Aggregator { provider, normalizer, cache, cache_writes: TaskTracker::new() }
    }

    /// create from config. The cache is only used if there is a store and the config enables it
    pub fn from_config (config: &FlightsConfig, provider: Arc<dyn FlightProvider>, store: Option<Arc<dyn KvStore>>)->Self {
        let cache = store
            .filter( |_| config.use_cache)
            .map( |store| FlightCache::from_config( store, config));
        Aggregator::new( provider, Normalizer::from_config( config), cache)
    }

    pub fn has_cache (&self)->bool { self.cache.is_some() }

    /// the current flights. This never fails: if there is no fresh cache entry and the live path
    /// does not produce a batch we return the fallback batch
    pub async fn get_live_flights (&self)->FlightBatch {
        if let Some(batch) = self.read_cache().await {
            return batch
        }

        // a panicking provider should not take the request down with it
        let res = AssertUnwindSafe( self.fetch_live()).catch_unwind().await
            .unwrap_or_else( |_| Err( FlightsError::UpstreamTransport("provider panicked".to_string())));

        match res {
            Ok(batch) => {
                self.write_cache( &batch);
                batch
            }
            Err(e) => {
                warn!("live flights unavailable, using fallback: {e}");
                fallback_batch()
            }
        }
    }

    /// one upstream fetch without cache or fallback
    pub async fn fetch_live (&self)->Result<FlightBatch> {
        let states = self.provider.fetch_states().await?;
        let flights = self.normalizer.normalize( &states);
        Ok( FlightBatch::live( flights, EpochMillis::now()))
    }

    async fn read_cache (&self)->Option<FlightBatch> {
        let cache = self.cache.as_ref()?;
        match cache.get().await {
            Ok(Some(batch)) => {
                debug!("cache hit for '{}'", cache.key());
                Some(batch)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("cache read failed: {e}");
                None
            }
        }
    }

    /// store batch in the background. The response does not wait for this
    fn write_cache (&self, batch: &FlightBatch) {
        if let Some(cache) = &self.cache {
            let cache = cache.clone();
            let batch = batch.clone();
            self.cache_writes.spawn( async move {
                if let Err(e) = cache.put( &batch).await {
                    warn!("cache write failed: {e}");
                }
            });
        }
    }

    /// wait for all pending cache writes
    pub async fn settle (&self) {
        self.cache_writes.close();
        self.cache_writes.wait().await;
        self.cache_writes.reopen();
    }
}
