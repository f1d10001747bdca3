//! # Keystone API Server
//!
//! HTTP layer over the keystone-core flows. Exposed as a library so the
//! integration tests can assemble the same app the binary serves.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
pub mod validation;
