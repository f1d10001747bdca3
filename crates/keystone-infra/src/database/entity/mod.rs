//! SeaORM entities.

pub mod access_token;
pub mod user;
