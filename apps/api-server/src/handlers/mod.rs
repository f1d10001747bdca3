//! HTTP handlers and route configuration.

mod auth;
mod health;
mod users;

use std::sync::Arc;

use actix_web::web;

use keystone_core::domain::User;
use keystone_core::ports::RateLimiter;
use keystone_shared::dto::UserResponse;

use crate::middleware::rate_limit::RateLimitMiddleware;

/// Configure all application routes.
///
/// The public credential endpoints sit behind the rate limiter; the
/// authenticated ones do not.
pub fn configure_routes(cfg: &mut web::ServiceConfig, limiter: Arc<dyn RateLimiter>) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/register")
                    .wrap(RateLimitMiddleware::new(limiter.clone()))
                    .route(web::post().to(users::register)),
            )
            .service(
                web::scope("/auth")
                    .service(
                        web::resource("/login")
                            .wrap(RateLimitMiddleware::new(limiter))
                            .route(web::post().to(auth::login)),
                    )
                    .route("/logout", web::post().to(auth::logout))
                    .route("/me", web::get().to(auth::me)),
            ),
    );
}

/// Map a domain user to its public shape. The password hash stops here.
pub(crate) fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}
