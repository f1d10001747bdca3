//! User registration handler.

use actix_web::{HttpResponse, web};

use keystone_core::service::NewUser;
use keystone_shared::dto::{RegisterRequest, RegisterResponse};

use crate::handlers::user_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::validation;

/// POST /api/register
///
/// Creates an account and immediately issues its first bearer token.
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validation::validate_register(&req)?;

    let registration = state
        .registration
        .register(NewUser {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        access_token: registration.token.access_token,
        token_type: registration.token.token_type.to_string(),
        user: user_response(&registration.user),
    }))
}
