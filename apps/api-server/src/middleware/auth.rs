//! Authentication middleware and extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use keystone_core::DomainError;
use keystone_core::domain::User;
use keystone_core::ports::AuthError;
use keystone_shared::ErrorResponse;

use crate::state::AppState;

/// Authenticated caller, resolved from the bearer token.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user.name)
/// }
/// ```
///
/// Carries the concrete token alongside the user so logout can revoke
/// exactly the credential that was presented.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: User,
    pub token: String,
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::MissingAuth | AuthError::InvalidToken => {
                actix_web::http::StatusCode::UNAUTHORIZED
            }
            _ => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = match &self.0 {
            AuthError::MissingAuth => ErrorResponse::unauthorized()
                .with_detail("Please provide a valid Bearer token in the Authorization header."),
            AuthError::InvalidToken => {
                ErrorResponse::unauthorized().with_detail("Unauthenticated.")
            }
            _ => ErrorResponse::internal_error(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let auth_header = req.headers().get(header::AUTHORIZATION).cloned();

        Box::pin(async move {
            let state = match state {
                Some(state) => state,
                None => {
                    tracing::error!("AppState not found in app data");
                    return Err(AuthenticationError(AuthError::Backend(
                        "Server configuration error".to_string(),
                    )));
                }
            };

            let auth_header = auth_header.ok_or(AuthenticationError(AuthError::MissingAuth))?;
            let auth_str = auth_header
                .to_str()
                .map_err(|_| AuthenticationError(AuthError::InvalidToken))?;

            // Parse "Bearer <token>"
            let token = auth_str
                .strip_prefix("Bearer ")
                .ok_or(AuthenticationError(AuthError::InvalidToken))?;

            // Token resolution hits the store, hence the boxed future.
            match state.auth.authenticate(token).await {
                Ok(user) => Ok(Identity {
                    user,
                    token: token.to_string(),
                }),
                Err(DomainError::Unauthenticated) => {
                    Err(AuthenticationError(AuthError::InvalidToken))
                }
                Err(e) => {
                    tracing::error!("Token resolution failed: {}", e);
                    Err(AuthenticationError(AuthError::Backend(e.to_string())))
                }
            }
        })
    }
}
