//! Keygate - An in-memory API key server
//!
//! Issues opaque bearer keys bound to an owner, validates them against a fixed
//! expiry window and evicts stale keys lazily on read.

pub mod api;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use keys::KeyStore;
