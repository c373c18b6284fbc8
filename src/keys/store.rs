//! Key Store Module
//!
//! In-memory registry of issued keys. Expired records are removed only when a
//! read touches them; there is no background sweep, so an expired key nobody
//! asks about stays in memory until the next [`KeyStore::list`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::Result;
use crate::keys::{
    generate_token, Clock, EntropySource, KeyListing, KeyRecord, KeyStats, OsEntropy,
    StatsSnapshot, SystemClock,
};

// == Key Store ==
/// Registry of issued keys with lazy expiry.
///
/// All locking is internal, so a store is shared as `Arc<KeyStore>` and every
/// operation takes `&self`.
pub struct KeyStore {
    /// token -> record
    records: RwLock<HashMap<String, KeyRecord>>,
    /// Operation counters
    stats: KeyStats,
    /// Lifetime of every key
    expiry_window: Duration,
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn EntropySource>,
}

impl KeyStore {
    // == Constructor ==
    /// Creates a store using the system clock and OS entropy.
    ///
    /// # Arguments
    /// * `expiry_window_secs` - Seconds after issuance during which a key is valid
    pub fn new(expiry_window_secs: u64) -> Self {
        Self::with_sources(
            expiry_window_secs,
            Arc::new(SystemClock),
            Arc::new(OsEntropy),
        )
    }

    /// Creates a store with an injected clock and entropy source.
    pub fn with_sources(
        expiry_window_secs: u64,
        clock: Arc<dyn Clock>,
        entropy: Arc<dyn EntropySource>,
    ) -> Self {
        let secs = i64::try_from(expiry_window_secs).unwrap_or(i64::MAX);
        Self {
            records: RwLock::new(HashMap::new()),
            stats: KeyStats::new(),
            expiry_window: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
            clock,
            entropy,
        }
    }

    // == Issue ==
    /// Generates a new key for `owner` and registers it.
    ///
    /// `owner` is stored as given, empty strings included. Fails with
    /// `RandomnessFailure` if the entropy source cannot supply bytes; nothing
    /// is inserted in that case.
    pub async fn issue(&self, owner: &str) -> Result<String> {
        let token = generate_token(self.entropy.as_ref())?;
        let record = KeyRecord::new(token.clone(), owner.to_string(), self.clock.now());

        {
            let mut records = self.records.write().await;
            records.insert(token.clone(), record);
        }

        self.stats.record_issued();
        info!(owner = %owner, "Issued API key");
        Ok(token)
    }

    // == Validate ==
    /// Returns true if `token` is registered and still inside the expiry window.
    ///
    /// Fresh keys are checked under the shared lock only. An expired key is
    /// re-checked under the exclusive lock before removal, since another caller
    /// may have evicted it in between. Successful validation does not extend
    /// the key's lifetime.
    pub async fn validate(&self, token: &str) -> bool {
        let now = self.clock.now();

        {
            let records = self.records.read().await;
            match records.get(token) {
                None => {
                    self.stats.record_rejected();
                    return false;
                }
                Some(record) if !record.is_expired(now, self.expiry_window) => {
                    self.stats.record_accepted();
                    return true;
                }
                Some(_) => {}
            }
        }

        let evicted = {
            let mut records = self.records.write().await;
            let still_expired = records
                .get(token)
                .is_some_and(|record| record.is_expired(now, self.expiry_window));
            still_expired && records.remove(token).is_some()
        };

        if evicted {
            self.stats.record_evicted(1);
            debug!("Evicted expired API key on validation");
        }
        self.stats.record_rejected();
        false
    }

    // == List ==
    /// Returns every live key with its expiry, evicting expired records.
    ///
    /// Runs under the exclusive lock for its whole duration, so it doubles as
    /// a full eviction pass. Output is ordered by expiry, then key.
    pub async fn list(&self) -> Vec<KeyListing> {
        let now = self.clock.now();
        let window = self.expiry_window;

        let (mut listings, evicted) = {
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|_, record| !record.is_expired(now, window));
            let evicted = before - records.len();

            let listings: Vec<KeyListing> =
                records.values().map(|record| record.listing(window)).collect();
            (listings, evicted)
        };

        if evicted > 0 {
            self.stats.record_evicted(evicted as u64);
            debug!("Evicted {} expired API keys during listing", evicted);
        }

        listings.sort_by(|a, b| a.expiry.cmp(&b.expiry).then_with(|| a.key.cmp(&b.key)));
        listings
    }

    // == Contains ==
    /// Returns true if `token` is held, expired or not. Never evicts.
    pub async fn contains(&self, token: &str) -> bool {
        self.records.read().await.contains_key(token)
    }

    // == Stats ==
    /// Returns current counters.
    pub async fn stats(&self) -> StatsSnapshot {
        let active = self.len().await;
        self.stats.snapshot(active)
    }

    // == Length ==
    /// Returns the number of records held, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if no records are held.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Returns the configured expiry window.
    pub fn expiry_window(&self) -> Duration {
        self.expiry_window
    }
}
