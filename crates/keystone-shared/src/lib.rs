//! # Keystone Shared
//!
//! Request/response shapes shared between the server and any client.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
