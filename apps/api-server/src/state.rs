//! Application state - shared across all handlers.

use std::sync::Arc;

use keystone_core::ports::{PasswordService, TokenIssuer, UserRepository};
use keystone_core::service::{AuthService, RegistrationService};
use keystone_infra::database::{self, DatabaseConfig};
use keystone_infra::{
    Argon2PasswordService, InMemoryTokenIssuer, InMemoryUserRepository, PostgresTokenIssuer,
    PostgresUserRepository,
};

/// Shared application state: the two flows, fully wired.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub registration: Arc<RegistrationService>,
}

impl AppState {
    /// Build the application state with appropriate adapters.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let (users, tokens): (Arc<dyn UserRepository>, Arc<dyn TokenIssuer>) = match db_config {
            Some(config) => match database::connect(config).await {
                Ok(conn) => (
                    Arc::new(PostgresUserRepository::new(conn.clone())),
                    Arc::new(PostgresTokenIssuer::new(conn)),
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    (
                        Arc::new(InMemoryUserRepository::new()),
                        Arc::new(InMemoryTokenIssuer::new()),
                    )
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (
                    Arc::new(InMemoryUserRepository::new()),
                    Arc::new(InMemoryTokenIssuer::new()),
                )
            }
        };

        let state = Self::wire(users, tokens);
        tracing::info!("Application state initialized");
        state
    }

    /// State wired to in-memory adapters. Used by the integration tests.
    pub fn in_memory() -> Self {
        Self::wire(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryTokenIssuer::new()),
        )
    }

    fn wire(users: Arc<dyn UserRepository>, tokens: Arc<dyn TokenIssuer>) -> Self {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        Self {
            auth: Arc::new(AuthService::new(
                users.clone(),
                passwords.clone(),
                tokens.clone(),
            )),
            registration: Arc::new(RegistrationService::new(users, passwords, tokens)),
        }
    }
}
