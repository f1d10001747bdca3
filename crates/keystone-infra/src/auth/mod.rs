//! Authentication adapters.

mod memory;
#[cfg(feature = "auth")]
mod password;
pub mod token;

pub use memory::InMemoryTokenIssuer;

#[cfg(feature = "auth")]
pub use password::Argon2PasswordService;
