//! # Keystone Core
//!
//! The domain layer of the Keystone identity service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the entities, the error taxonomy, the ports that adapters implement, and the
//! authentication/registration flows that orchestrate them.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
