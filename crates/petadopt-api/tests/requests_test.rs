//! Adoption/partner requests, placeholder image and health check.
//!
//! Run with: `cargo test -p petadopt-api --test requests_test`

mod helpers;

use helpers::{setup_test_app, test_config, TestAppBuilder};
use petadopt_api::{setup::routes, AppState};
use petadopt_db::{
    InMemoryAdoptionRepository, InMemoryPartnerRepository, InMemoryPetRepository,
    InMemoryUserRepository,
};
use petadopt_storage::LocalStorage;
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_submit_adoption_request() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/adopt")
        .json(&json!({
            "petName": "Bolt",
            "name": " Ana Souza ",
            "email": "ana@example.com",
            "phone": "81 99999-0000",
            "reason": "Company for my kids",
            "home": ""
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["requestId"], 1);

    let saved = app.adoptions.all().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].user_name, "Ana Souza");
    assert_eq!(saved[0].home, None);
    assert_eq!(saved[0].address, None);
}

#[tokio::test]
async fn test_adoption_request_requires_valid_email() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/adopt")
        .json(&json!({ "petName": "Bolt", "name": "Ana", "email": "not-an-email" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(app.adoptions.all().await.is_empty());
}

#[tokio::test]
async fn test_adoption_request_missing_pet_name_is_400() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/adopt")
        .json(&json!({ "name": "Ana", "email": "ana@example.com" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let response = app
        .client()
        .post("/api/adopt")
        .json(&json!({ "petName": "   ", "name": "Ana", "email": "ana@example.com" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_adoption_request_storage_failure_is_500() {
    let app = TestAppBuilder::new()
        .adoptions(InMemoryAdoptionRepository::failing())
        .build()
        .await;

    let response = app
        .client()
        .post("/api/adopt")
        .json(&json!({ "petName": "Bolt", "name": "Ana", "email": "ana@example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to access database");
}

#[tokio::test]
async fn test_register_partner() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/partner")
        .json(&json!({
            "partnerName": "Patas Felizes",
            "partnerType": "ngo",
            "partnerEmail": "contato@patas.org",
            "partnerCity": "Recife",
            "partnerState": "PE"
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["partnerId"], 1);

    let saved = app.partners.all().await;
    assert_eq!(saved[0].name, "Patas Felizes");
    assert_eq!(saved[0].partner_type.as_deref(), Some("ngo"));
}

#[tokio::test]
async fn test_register_partner_requires_email() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/partner")
        .json(&json!({ "partnerName": "Patas Felizes" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(app.partners.all().await.is_empty());
}

#[tokio::test]
async fn test_placeholder_image() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/placeholder/400/300").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("content-type"), "image/svg+xml");
    let svg = response.text();
    assert!(svg.contains(r#"width="400""#));
    assert!(svg.contains(r#"height="300""#));
}

#[tokio::test]
async fn test_placeholder_image_reads_leading_digits() {
    let app = setup_test_app().await;

    let svg = app.client().get("/api/placeholder/400px/12.5").await.text();

    assert!(svg.contains(r#"width="400""#));
    assert!(svg.contains(r#"height="12""#));
}

#[tokio::test]
async fn test_placeholder_image_bad_dimensions_fall_back() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/placeholder/abc/0").await;

    assert_eq!(response.status_code(), 200);
    let svg = response.text();
    assert!(svg.contains(r#"width="300""#));
    assert!(svg.contains(r#"height="300""#));
}

#[tokio::test]
async fn test_root_upload_base_url_fails_route_setup() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(
        LocalStorage::new(dir.path(), "/uploads".to_string())
            .await
            .unwrap(),
    );

    for base_url in ["/", "/uploads/"] {
        let mut config = test_config(dir.path());
        config.upload_base_url = base_url.to_string();
        let state = Arc::new(AppState::new(
            &config,
            Arc::new(InMemoryPetRepository::new()),
            storage.clone(),
            Arc::new(InMemoryAdoptionRepository::new()),
            Arc::new(InMemoryPartnerRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        ));

        assert!(routes::setup_routes(&config, state).is_err(), "{base_url}");
    }
}
