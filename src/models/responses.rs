//! Response DTOs for the key server API
//!
//! Defines the structure of outgoing HTTP response bodies. Key listings are
//! serialized straight from [`crate::keys::KeyListing`].

use serde::Serialize;

use crate::keys::StatsSnapshot;

/// Response body for key issuance (POST /keys/:owner)
#[derive(Debug, Clone, Serialize)]
pub struct IssueKeyResponse {
    /// Owner the key was issued to
    pub owner: String,
    /// The new key
    pub key: String,
}

impl IssueKeyResponse {
    /// Creates a new IssueKeyResponse
    pub fn new(owner: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            key: key.into(),
        }
    }
}

/// Response body for a successful key check (GET /keys/check)
#[derive(Debug, Clone, Serialize)]
pub struct CheckKeyResponse {
    pub authenticated: bool,
}

impl CheckKeyResponse {
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Keys issued since startup
    pub issued: u64,
    /// Successful validations
    pub accepted: u64,
    /// Failed validations
    pub rejected: u64,
    /// Records removed by lazy eviction
    pub evicted: u64,
    /// Records currently held
    pub active_keys: usize,
    /// accepted / (accepted + rejected)
    pub acceptance_rate: f64,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(stats: StatsSnapshot) -> Self {
        Self {
            acceptance_rate: stats.acceptance_rate(),
            issued: stats.issued,
            accepted: stats.accepted,
            rejected: stats.rejected,
            evicted: stats.evicted,
            active_keys: stats.active_keys,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
