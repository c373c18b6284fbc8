//! Key Record Module
//!
//! Defines a single issued key and the listing view handed out to callers.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

// == Key Record ==
/// An issued API key. Records are write-once; the store never updates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    /// The opaque bearer token
    pub token: String,
    /// Caller-supplied owner identity, stored as given
    pub owner: String,
    /// Issuance time
    pub issued_at: DateTime<Utc>,
}

impl KeyRecord {
    // == Constructor ==
    /// Creates a record issued at `issued_at`.
    pub fn new(token: String, owner: String, issued_at: DateTime<Utc>) -> Self {
        Self {
            token,
            owner,
            issued_at,
        }
    }

    // == Is Expired ==
    /// Checks whether the record has outlived `window` at time `now`.
    ///
    /// Boundary condition: a record exactly `window` old is still valid. Only
    /// an age strictly greater than the window expires it.
    pub fn is_expired(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now.signed_duration_since(self.issued_at) > window
    }

    // == Expires At ==
    /// Returns the last instant at which the record is still valid.
    pub fn expires_at(&self, window: Duration) -> DateTime<Utc> {
        self.issued_at
            .checked_add_signed(window)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Builds the listing view for this record.
    pub fn listing(&self, window: Duration) -> KeyListing {
        KeyListing {
            key: self.token.clone(),
            expiry: self.expires_at(window).timestamp(),
        }
    }
}

// == Key Listing ==
/// Snapshot of a live key as returned by enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyListing {
    /// The token
    pub key: String,
    /// Expiry as Unix seconds
    pub expiry: i64,
}
