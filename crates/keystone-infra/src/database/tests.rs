use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use keystone_core::ports::{TokenIssuer, UserRepository};

use super::entity::{access_token, user};
use super::postgres_repo::{PostgresTokenIssuer, PostgresUserRepository};
use crate::auth::token;

fn user_model(email: &str) -> user::Model {
    let now = Utc::now();
    user::Model {
        id: Uuid::new_v4(),
        name: "Test User".to_owned(),
        email: email.to_owned(),
        password_hash: "phc$argon2id$stub".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn token_model(user_id: Uuid, token_hash: &str) -> access_token::Model {
    access_token::Model {
        id: Uuid::new_v4(),
        user_id,
        token_hash: token_hash.to_owned(),
        created_at: Utc::now().into(),
        last_used_at: None,
    }
}

#[tokio::test]
async fn find_user_by_email() {
    let expected = user_model("test@example.com");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![expected.clone()]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let found = repo.find_by_email("test@example.com").await.unwrap();

    let found = found.unwrap();
    assert_eq!(found.id, expected.id);
    assert_eq!(found.email, "test@example.com");
}

#[tokio::test]
async fn issue_returns_prefixed_plaintext() {
    let user_id = Uuid::new_v4();

    // INSERT .. RETURNING comes back as a query result on Postgres.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![token_model(user_id, "digest")]])
        .into_connection();

    let issuer = PostgresTokenIssuer::new(db);
    let issued = issuer.issue(user_id).await.unwrap();

    assert!(issued.access_token.starts_with(token::TOKEN_PREFIX));
    assert_eq!(issued.token_type, "Bearer");
}

#[tokio::test]
async fn resolve_known_token_returns_user_id() {
    let user_id = Uuid::new_v4();
    let plaintext = token::generate_plaintext();
    let record = token_model(user_id, &token::digest(&plaintext));

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![record.clone()]])
        // last_used_at stamp (UPDATE .. RETURNING)
        .append_query_results(vec![vec![record]])
        .into_connection();

    let issuer = PostgresTokenIssuer::new(db);
    let resolved = issuer.resolve(&plaintext).await.unwrap();

    assert_eq!(resolved, Some(user_id));
}

#[tokio::test]
async fn resolve_unknown_token_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<access_token::Model>::new()])
        .into_connection();

    let issuer = PostgresTokenIssuer::new(db);
    let resolved = issuer.resolve("akt_unknown").await.unwrap();

    assert_eq!(resolved, None);
}

#[tokio::test]
async fn revoke_is_idempotent_on_missing_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let issuer = PostgresTokenIssuer::new(db);
    issuer.revoke("akt_some-token").await.unwrap();
    // Second revocation matches nothing and still succeeds.
    issuer.revoke("akt_some-token").await.unwrap();
}
