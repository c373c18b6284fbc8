//! Keys Module
//!
//! Issues opaque API keys, validates them against a fixed expiry window and
//! lazily evicts stale entries on read.

mod clock;
mod record;
mod stats;
mod store;
mod token;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use record::{KeyListing, KeyRecord};
pub use stats::{KeyStats, StatsSnapshot};
pub use store::KeyStore;
pub use token::{digest, encode, generate_token, EntropySource, OsEntropy, ENTROPY_BYTES};

// == Public Constants ==
/// Default key lifetime in seconds (one hour)
pub const DEFAULT_EXPIRY_SECS: u64 = 3600;
