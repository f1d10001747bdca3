//! Authentication handlers: login, logout, current user.

use actix_web::{HttpResponse, web};

use keystone_core::service::Credentials;
use keystone_shared::dto::{AuthResponse, LoginRequest, MessageResponse};

use crate::handlers::user_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::validation;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validation::validate_login(&req)?;

    let token = state
        .auth
        .login(&Credentials {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token.access_token,
        token_type: token.token_type.to_string(),
    }))
}

/// POST /api/auth/logout - Protected route
///
/// Revokes the token the caller authenticated with. The extractor has
/// already proven it resolves, so this cannot fail for the caller.
pub async fn logout(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    state.auth.logout(&identity.token).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Successfully logged out".to_string(),
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(user_response(&identity.user)))
}
