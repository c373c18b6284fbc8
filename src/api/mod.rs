//! API Module
//!
//! HTTP handlers and routing for the key server REST API.
//!
//! # Endpoints
//! - `POST /keys/:owner` - Issue a key for an owner
//! - `GET /keys` - List live keys with their expiry
//! - `GET /auth/check` - Validate the key in the `X-API-Key` header
//! - `GET /stats` - Issuance and validation counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
