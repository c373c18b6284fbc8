//! Key Statistics Module
//!
//! Tracks issuance and validation outcomes. Counters are atomic so the
//! shared-read validation path can record them without write access.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Key Stats ==
/// Live operation counters owned by a [`crate::keys::KeyStore`].
#[derive(Debug, Default)]
pub struct KeyStats {
    issued: AtomicU64,
    accepted: AtomicU64,
    rejected: AtomicU64,
    evicted: AtomicU64,
}

impl KeyStats {
    /// Creates a new KeyStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_issued(&self) {
        self.issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_evicted(&self, count: u64) {
        self.evicted.fetch_add(count, Ordering::Relaxed);
    }

    /// Copies the counters out, paired with the current registry size.
    pub fn snapshot(&self, active_keys: usize) -> StatsSnapshot {
        StatsSnapshot {
            issued: self.issued.load(Ordering::Relaxed),
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
            active_keys,
        }
    }
}

// == Stats Snapshot ==
/// Point-in-time copy of [`KeyStats`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Keys issued since startup
    pub issued: u64,
    /// Validations that succeeded
    pub accepted: u64,
    /// Validations that failed (unknown or expired key)
    pub rejected: u64,
    /// Records removed by lazy eviction
    pub evicted: u64,
    /// Records currently held, including expired ones not yet touched
    pub active_keys: usize,
}

impl StatsSnapshot {
    /// Fraction of validations that succeeded, or 0.0 if none were made.
    pub fn acceptance_rate(&self) -> f64 {
        let total = self.accepted + self.rejected;
        if total == 0 {
            0.0
        } else {
            self.accepted as f64 / total as f64
        }
    }
}
