//! Response models for the key server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing HTTP response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    CheckKeyResponse, ErrorResponse, HealthResponse, IssueKeyResponse, StatsResponse,
};
