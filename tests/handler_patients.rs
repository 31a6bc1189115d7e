mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_patient_success(pool: PgPool) {
    let server = common::test_server(pool);

    let user_id = common::register(&server, "Alice", "alice@clinic.test", "pass").await;
    let token = common::login(&server, "alice@clinic.test", "pass").await;

    let response = server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "John Doe",
            "email": "john@clinic.test",
            "date_of_birth": "1990-04-12",
            "address": "12 Elm Street",
            "phone_number": "123456789"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["id"].is_i64());
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "john@clinic.test");
    assert_eq!(body["date_of_birth"], "1990-04-12");
    assert_eq!(body["address"], "12 Elm Street");
    assert_eq!(body["phone_number"], "123456789");
    assert_eq!(body["created_by"], user_id);
}

#[sqlx::test]
async fn test_create_patient_minimal_fields(pool: PgPool) {
    let server = common::test_server(pool);

    let token = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;

    let response = server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "John Doe",
            "email": "john@clinic.test"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["date_of_birth"].is_null());
    assert!(body["address"].is_null());
    assert!(body["phone_number"].is_null());
}

#[sqlx::test]
async fn test_create_patient_duplicate_email(pool: PgPool) {
    let server = common::test_server(pool);

    let token = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;

    server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({ "name": "John", "email": "john@clinic.test" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Johnny", "email": "john@clinic.test" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "email": "Email already exists" })
    );
}

#[sqlx::test]
async fn test_create_patient_invalid_email(pool: PgPool) {
    let server = common::test_server(pool);

    let token = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;

    let response = server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({ "name": "John", "email": "nope" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "email": "Enter a valid email address." })
    );
}

#[sqlx::test]
async fn test_create_patient_phone_too_long(pool: PgPool) {
    let server = common::test_server(pool);

    let token = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;

    let response = server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "John",
            "email": "john@clinic.test",
            "phone_number": "1234567890123"
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "phone_number": "Ensure this field has no more than 12 characters." })
    );
}

#[sqlx::test]
async fn test_list_patients_scoped_to_owner(pool: PgPool) {
    let server = common::test_server(pool);

    let token_a = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;
    let token_b = common::register_and_login(&server, "Bob", "bob@clinic.test", "pass").await;

    for (name, email) in [("P1", "p1@clinic.test"), ("P2", "p2@clinic.test")] {
        server
            .post("/patients")
            .authorization_bearer(&token_a)
            .json(&json!({ "name": name, "email": email }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    server
        .post("/patients")
        .authorization_bearer(&token_b)
        .json(&json!({ "name": "P3", "email": "p3@clinic.test" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/patients").authorization_bearer(&token_a).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let patients = body.as_array().unwrap();
    assert_eq!(patients.len(), 2);
    assert!(
        patients
            .iter()
            .all(|p| p["email"] != "p3@clinic.test")
    );
}

#[sqlx::test]
async fn test_patient_detail_owned(pool: PgPool) {
    let server = common::test_server(pool);

    let token = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;

    let created = server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({ "name": "John", "email": "john@clinic.test" }))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .get(&format!("/patients/{id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "John");
}

#[sqlx::test]
async fn test_patient_detail_foreign_is_404(pool: PgPool) {
    let server = common::test_server(pool);

    let token_a = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;
    let token_b = common::register_and_login(&server, "Bob", "bob@clinic.test", "pass").await;

    let created = server
        .post("/patients")
        .authorization_bearer(&token_a)
        .json(&json!({ "name": "P1", "email": "p1@clinic.test" }))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .get(&format!("/patients/{id}"))
        .authorization_bearer(&token_b)
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Patient not found" })
    );
}

#[sqlx::test]
async fn test_update_patient_replaces_all_fields(pool: PgPool) {
    let server = common::test_server(pool);

    let token = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;

    let created = server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "John",
            "email": "john@clinic.test",
            "phone_number": "123456789"
        }))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    // Full replacement: an omitted optional field clears the stored value.
    let response = server
        .put(&format!("/patients/{id}"))
        .authorization_bearer(&token)
        .json(&json!({
            "name": "John Q. Doe",
            "email": "john@clinic.test",
            "address": "99 Oak Avenue"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "John Q. Doe");
    assert_eq!(body["address"], "99 Oak Avenue");
    assert!(body["phone_number"].is_null());
}

#[sqlx::test]
async fn test_update_patient_keeps_own_email(pool: PgPool) {
    let server = common::test_server(pool);

    let token = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;

    let created = server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({ "name": "John", "email": "john@clinic.test" }))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/patients/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "name": "John Updated", "email": "john@clinic.test" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "John Updated");
}

#[sqlx::test]
async fn test_update_patient_foreign_is_404(pool: PgPool) {
    let server = common::test_server(pool);

    let token_a = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;
    let token_b = common::register_and_login(&server, "Bob", "bob@clinic.test", "pass").await;

    let created = server
        .post("/patients")
        .authorization_bearer(&token_a)
        .json(&json!({ "name": "P1", "email": "p1@clinic.test" }))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/patients/{id}"))
        .authorization_bearer(&token_b)
        .json(&json!({ "name": "Hijacked", "email": "p1@clinic.test" }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_patient(pool: PgPool) {
    let server = common::test_server(pool);

    let token = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;

    let created = server
        .post("/patients")
        .authorization_bearer(&token)
        .json(&json!({ "name": "John", "email": "john@clinic.test" }))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    server
        .delete(&format!("/patients/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/patients/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_patient_foreign_is_404(pool: PgPool) {
    let server = common::test_server(pool);

    let token_a = common::register_and_login(&server, "Alice", "alice@clinic.test", "pass").await;
    let token_b = common::register_and_login(&server, "Bob", "bob@clinic.test", "pass").await;

    let created = server
        .post("/patients")
        .authorization_bearer(&token_a)
        .json(&json!({ "name": "P1", "email": "p1@clinic.test" }))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    server
        .delete(&format!("/patients/{id}"))
        .authorization_bearer(&token_b)
        .await
        .assert_status_not_found();

    // Still there for the owner.
    server
        .get(&format!("/patients/{id}"))
        .authorization_bearer(&token_a)
        .await
        .assert_status_ok();
}
