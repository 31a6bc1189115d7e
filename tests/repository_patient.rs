mod common;

use chrono::NaiveDate;
use clinic_api::domain::entities::{NewPatient, PatientFields};
use clinic_api::domain::repositories::PatientRepository;
use clinic_api::infrastructure::persistence::PgPatientRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn fields(name: &str, email: &str) -> PatientFields {
    PatientFields {
        name: name.to_string(),
        email: email.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
        address: Some("12 Elm Street".to_string()),
        phone_number: Some("123456789".to_string()),
    }
}

#[sqlx::test]
async fn test_create_and_find_owned(pool: PgPool) {
    let owner = common::create_test_user(&pool, "Alice", "alice@clinic.test", "pass").await;
    let repo = PgPatientRepository::new(Arc::new(pool));

    let created = repo
        .create(NewPatient::from_fields(fields("John", "john@clinic.test"), owner))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.created_by, owner);
    assert_eq!(created.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 12));

    let found = repo.find_owned(created.id, owner).await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().email, "john@clinic.test");
}

#[sqlx::test]
async fn test_find_owned_wrong_owner_is_none(pool: PgPool) {
    let owner = common::create_test_user(&pool, "Alice", "alice@clinic.test", "pass").await;
    let stranger = common::create_test_user(&pool, "Bob", "bob@clinic.test", "pass").await;
    let repo = PgPatientRepository::new(Arc::new(pool));

    let created = repo
        .create(NewPatient::from_fields(fields("John", "john@clinic.test"), owner))
        .await
        .unwrap();

    let found = repo.find_owned(created.id, stranger).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_list_by_owner_filters(pool: PgPool) {
    let owner = common::create_test_user(&pool, "Alice", "alice@clinic.test", "pass").await;
    let other = common::create_test_user(&pool, "Bob", "bob@clinic.test", "pass").await;
    let repo = PgPatientRepository::new(Arc::new(pool));

    repo.create(NewPatient::from_fields(fields("P1", "p1@clinic.test"), owner))
        .await
        .unwrap();
    repo.create(NewPatient::from_fields(fields("P2", "p2@clinic.test"), owner))
        .await
        .unwrap();
    repo.create(NewPatient::from_fields(fields("P3", "p3@clinic.test"), other))
        .await
        .unwrap();

    let patients = repo.list_by_owner(owner).await.unwrap();

    assert_eq!(patients.len(), 2);
    assert!(patients.iter().all(|p| p.created_by == owner));
}

#[sqlx::test]
async fn test_update_owned_replaces_and_clears(pool: PgPool) {
    let owner = common::create_test_user(&pool, "Alice", "alice@clinic.test", "pass").await;
    let repo = PgPatientRepository::new(Arc::new(pool));

    let created = repo
        .create(NewPatient::from_fields(fields("John", "john@clinic.test"), owner))
        .await
        .unwrap();

    let replacement = PatientFields {
        name: "John Q. Doe".to_string(),
        email: "john@clinic.test".to_string(),
        date_of_birth: None,
        address: None,
        phone_number: None,
    };

    let updated = repo
        .update_owned(created.id, owner, replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "John Q. Doe");
    assert!(updated.date_of_birth.is_none());
    assert!(updated.address.is_none());
    assert!(updated.phone_number.is_none());
}

#[sqlx::test]
async fn test_update_owned_foreign_is_none(pool: PgPool) {
    let owner = common::create_test_user(&pool, "Alice", "alice@clinic.test", "pass").await;
    let stranger = common::create_test_user(&pool, "Bob", "bob@clinic.test", "pass").await;
    let repo = PgPatientRepository::new(Arc::new(pool));

    let created = repo
        .create(NewPatient::from_fields(fields("John", "john@clinic.test"), owner))
        .await
        .unwrap();

    let result = repo
        .update_owned(created.id, stranger, fields("Hijacked", "john@clinic.test"))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_owned(pool: PgPool) {
    let owner = common::create_test_user(&pool, "Alice", "alice@clinic.test", "pass").await;
    let repo = PgPatientRepository::new(Arc::new(pool));

    let created = repo
        .create(NewPatient::from_fields(fields("John", "john@clinic.test"), owner))
        .await
        .unwrap();

    assert!(repo.delete_owned(created.id, owner).await.unwrap());
    assert!(!repo.delete_owned(created.id, owner).await.unwrap());
}

#[sqlx::test]
async fn test_email_exists_with_exclusion(pool: PgPool) {
    let owner = common::create_test_user(&pool, "Alice", "alice@clinic.test", "pass").await;
    let repo = PgPatientRepository::new(Arc::new(pool));

    let created = repo
        .create(NewPatient::from_fields(fields("John", "john@clinic.test"), owner))
        .await
        .unwrap();

    assert!(repo.email_exists("john@clinic.test", None).await.unwrap());
    assert!(
        !repo
            .email_exists("john@clinic.test", Some(created.id))
            .await
            .unwrap()
    );
    assert!(!repo.email_exists("other@clinic.test", None).await.unwrap());
}

#[sqlx::test]
async fn test_find_by_name_picks_lowest_id(pool: PgPool) {
    let owner = common::create_test_user(&pool, "Alice", "alice@clinic.test", "pass").await;
    let repo = PgPatientRepository::new(Arc::new(pool));

    let first = repo
        .create(NewPatient::from_fields(fields("Twin", "twin1@clinic.test"), owner))
        .await
        .unwrap();
    repo.create(NewPatient::from_fields(fields("Twin", "twin2@clinic.test"), owner))
        .await
        .unwrap();

    let found = repo.find_by_name("Twin").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);

    let missing = repo.find_by_name("Nobody").await.unwrap();
    assert!(missing.is_none());
}
