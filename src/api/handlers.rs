//! API Handlers
//!
//! HTTP request handlers for each key server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use tracing::{debug, error};

use crate::error::{KeyError, Result};
use crate::keys::KeyStore;
use crate::models::{CheckKeyResponse, HealthResponse, IssueKeyResponse, StatsResponse};

/// Header carrying the presented API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Application state shared across all handlers.
///
/// The key store does its own locking, so the state only needs an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared key registry
    pub keys: Arc<KeyStore>,
}

impl AppState {
    /// Creates a new AppState with the given key store.
    pub fn new(keys: KeyStore) -> Self {
        Self {
            keys: Arc::new(keys),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(KeyStore::new(config.expiry_window_secs))
    }
}

/// Handler for POST /keys/:owner
///
/// Issues a new key for the owner named in the path.
pub async fn issue_key_handler(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<IssueKeyResponse>> {
    let key = state.keys.issue(&owner).await.map_err(|e| {
        error!(owner = %owner, "Failed to issue API key: {}", e);
        e
    })?;

    Ok(Json(IssueKeyResponse::new(owner, key)))
}

/// Handler for GET /auth/check
///
/// Validates the key presented in the `X-API-Key` header. A missing or
/// non-UTF-8 header is treated like an unknown key.
pub async fn check_key_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CheckKeyResponse>> {
    let presented = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if state.keys.validate(presented).await {
        Ok(Json(CheckKeyResponse::authenticated()))
    } else {
        debug!("Rejected API key check");
        Err(KeyError::Unauthenticated)
    }
}

/// Handler for GET /keys
///
/// Lists live keys with their expiry, evicting expired ones.
pub async fn list_keys_handler(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let listings = state.keys.list().await;
    let body = serde_json::to_value(&listings)?;

    Ok(Json(body))
}

/// Handler for GET /stats
///
/// Returns issuance and validation counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.keys.stats().await.into())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
