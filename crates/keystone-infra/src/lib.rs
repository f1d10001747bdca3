//! # Keystone Infrastructure
//!
//! Concrete implementations of the ports defined in `keystone-core`:
//! the Postgres credential store and token issuer, their in-memory
//! counterparts, the Argon2 password hasher, and the rate limiter.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory adapters only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `auth` - Argon2 password hashing
//! - `rate-limit` - Rate limiting via governor

pub mod auth;
pub mod database;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

// Re-exports - In-Memory
pub use auth::InMemoryTokenIssuer;
pub use database::InMemoryUserRepository;

#[cfg(feature = "auth")]
pub use auth::Argon2PasswordService;

#[cfg(feature = "postgres")]
pub use database::{PostgresTokenIssuer, PostgresUserRepository};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};

pub use database::DatabaseConfig;
