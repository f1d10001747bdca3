//! Rate limiting adapters.

mod memory;

pub use memory::{InMemoryRateLimiter, RateLimitConfig};
