//! Shared fixtures for the HTTP flow tests.

use std::sync::Arc;
use std::time::Duration;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, Error, test, web};
use serde_json::json;

use api_server::handlers;
use api_server::state::AppState;
use keystone_core::ports::RateLimiter;
use keystone_infra::{InMemoryRateLimiter, RateLimitConfig};

/// App over in-memory adapters with an effectively unlimited rate limiter.
pub async fn spawn_app()
-> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    spawn_app_with_rate_limit(10_000).await
}

pub async fn spawn_app_with_rate_limit(
    max_requests: u32,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::new(RateLimitConfig {
        max_requests,
        window: Duration::from_secs(60),
    }));

    test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(|cfg| handlers::configure_routes(cfg, limiter)),
    )
    .await
}

pub fn register_request(name: &str, email: &str, password: &str) -> Request {
    test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": name,
            "email": email,
            "password": password,
        }))
        .to_request()
}

pub fn login_request(email: &str, password: &str) -> Request {
    test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "email": email,
            "password": password,
        }))
        .to_request()
}

pub fn me_request(token: Option<&str>) -> Request {
    let mut req = test::TestRequest::get().uri("/api/auth/me");
    if let Some(token) = token {
        req = req.insert_header(("Authorization", format!("Bearer {token}")));
    }
    req.to_request()
}

pub fn logout_request(token: &str) -> Request {
    test::TestRequest::post()
        .uri("/api/auth/logout")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request()
}
