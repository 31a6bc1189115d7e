#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use axum_test::TestServer;
use bigdecimal::BigDecimal;
use clinic_api::api::handlers::health_handler;
use clinic_api::api::middleware::auth;
use clinic_api::api::routes::{auth_routes, protected_routes};
use clinic_api::application::services::TokenService;
use clinic_api::state::AppState;
use clinic_api::utils::password::hash_password;
use serde_json::json;
use sqlx::PgPool;
use std::str::FromStr;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    let token_service = TokenService::new("test-signing-secret", 900, 86400);
    AppState::new(Arc::new(pool), token_service)
}

/// The production route table, minus the rate limiting layers. The peer-ip
/// key extractor needs connection info the test transport does not carry.
pub fn test_app(state: AppState) -> Router {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(auth_routes())
        .merge(protected)
        .with_state(state)
}

pub fn test_server(pool: PgPool) -> TestServer {
    TestServer::new(test_app(create_test_state(pool))).unwrap()
}

/// Registers an account through the API and returns its id.
pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> i64 {
    let response = server
        .post("/auth/register")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    body["id"].as_i64().unwrap()
}

/// Logs in and returns the access token.
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    body["access"].as_str().unwrap().to_string()
}

pub async fn register_and_login(
    server: &TestServer,
    name: &str,
    email: &str,
    password: &str,
) -> String {
    register(server, name, email, password).await;
    login(server, email, password).await
}

pub async fn create_test_user(pool: &PgPool, name: &str, email: &str, password: &str) -> i64 {
    let hash = hash_password(password).unwrap();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(hash)
    .fetch_one(pool)
    .await
    .unwrap();

    id
}

pub async fn create_test_patient(pool: &PgPool, owner_id: i64, name: &str, email: &str) -> i64 {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO patients (name, email, created_by) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .unwrap();

    id
}

pub async fn create_test_doctor(pool: &PgPool, name: &str, email: &str) -> i64 {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO doctors (name, email, consultation_fee) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(BigDecimal::from_str("500.00").unwrap())
    .fetch_one(pool)
    .await
    .unwrap();

    id
}

pub async fn create_test_mapping(pool: &PgPool, patient_id: i64, doctor_id: i64) -> i64 {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO patient_doctor_mappings (patient_id, doctor_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(patient_id)
    .bind(doctor_id)
    .fetch_one(pool)
    .await
    .unwrap();

    id
}
