//! Validation and abuse-control flow tests.

mod common;

use actix_web::test;
use serde_json::Value;

use common::{login_request, register_request, spawn_app, spawn_app_with_rate_limit};

#[actix_web::test]
async fn registration_reports_every_missing_field() {
    let app = spawn_app().await;

    let resp = test::call_service(&app, register_request("", "", "")).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("password"));
}

#[actix_web::test]
async fn registration_rejects_short_password_and_bad_email() {
    let app = spawn_app().await;

    let resp = test::call_service(&app, register_request("Jane", "not-an-email", "short")).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(
        errors["email"][0],
        "The email must be a valid email address."
    );
    assert_eq!(
        errors["password"][0],
        "The password must be at least 8 characters."
    );
}

#[actix_web::test]
async fn duplicate_registration_is_rejected_per_field() {
    let app = spawn_app().await;

    let resp = test::call_service(&app, register_request("Jane", "a@x.com", "password123")).await;
    assert_eq!(resp.status(), 201);

    let resp = test::call_service(&app, register_request("Janet", "a@x.com", "password456")).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["email"][0], "The email has already been taken.");
}

#[actix_web::test]
async fn login_requires_both_fields() {
    let app = spawn_app().await;

    let resp = test::call_service(&app, login_request("", "")).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("password"));
}

#[actix_web::test]
async fn login_attempts_beyond_the_limit_get_429() {
    let app = spawn_app_with_rate_limit(2).await;

    for _ in 0..2 {
        let resp = test::call_service(&app, login_request("nobody@x.com", "password123")).await;
        assert_eq!(resp.status(), 401);
    }

    let resp = test::call_service(&app, login_request("nobody@x.com", "password123")).await;
    assert_eq!(resp.status(), 429);
    assert!(resp.headers().contains_key("Retry-After"));
}
