//! Test helpers: build AppState and router for integration tests.
//!
//! Stores are in-memory and photos go to a temporary directory, so no
//! database server is needed: `cargo test -p petadopt-api`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use petadopt_api::setup::routes;
use petadopt_api::state::AppState;
use petadopt_core::{config::default_photo_extensions, Config, StorageBackend};
use petadopt_db::{
    InMemoryAdoptionRepository, InMemoryPartnerRepository, InMemoryPetRepository,
    InMemoryUserRepository,
};
use petadopt_storage::LocalStorage;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus handles on its collaborators.
pub struct TestApp {
    pub server: TestServer,
    pub pets: InMemoryPetRepository,
    pub adoptions: InMemoryAdoptionRepository,
    pub partners: InMemoryPartnerRepository,
    pub users: InMemoryUserRepository,
    pub storage: Arc<LocalStorage>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config(upload_dir: &Path) -> Config {
    Config {
        server_port: 0,
        database_url: "postgres://unused/petadopt".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 1,
        storage_backend: StorageBackend::Local,
        upload_dir: upload_dir.to_string_lossy().to_string(),
        upload_base_url: "/uploads".to_string(),
        static_dir: None,
        pet_photo_max_bytes: 1024 * 1024,
        pet_photo_allowed_extensions: default_photo_extensions(),
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
    }
}

/// Builder for test apps with pre-seeded or failing stores.
pub struct TestAppBuilder {
    pets: InMemoryPetRepository,
    adoptions: InMemoryAdoptionRepository,
    partners: InMemoryPartnerRepository,
    users: InMemoryUserRepository,
    max_photo_bytes: Option<usize>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            pets: InMemoryPetRepository::new(),
            adoptions: InMemoryAdoptionRepository::new(),
            partners: InMemoryPartnerRepository::new(),
            users: InMemoryUserRepository::new(),
            max_photo_bytes: None,
        }
    }

    pub fn pets(mut self, pets: InMemoryPetRepository) -> Self {
        self.pets = pets;
        self
    }

    pub fn adoptions(mut self, adoptions: InMemoryAdoptionRepository) -> Self {
        self.adoptions = adoptions;
        self
    }

    pub fn users(mut self, users: InMemoryUserRepository) -> Self {
        self.users = users;
        self
    }

    pub fn max_photo_bytes(mut self, max: usize) -> Self {
        self.max_photo_bytes = Some(max);
        self
    }

    pub async fn build(self) -> TestApp {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let mut config = test_config(temp_dir.path());
        if let Some(max) = self.max_photo_bytes {
            config.pet_photo_max_bytes = max;
        }

        let storage = Arc::new(
            LocalStorage::new(temp_dir.path(), config.upload_base_url.clone())
                .await
                .expect("Failed to create local storage"),
        );

        let state = Arc::new(AppState::new(
            &config,
            Arc::new(self.pets.clone()),
            storage.clone(),
            Arc::new(self.adoptions.clone()),
            Arc::new(self.partners.clone()),
            Arc::new(self.users.clone()),
        ));
        let app = routes::setup_routes(&config, state).expect("Failed to build routes");
        let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

        TestApp {
            server,
            pets: self.pets,
            adoptions: self.adoptions,
            partners: self.partners,
            users: self.users,
            storage,
            _temp_dir: temp_dir,
        }
    }
}

/// Setup test app with empty stores and temp-dir storage.
pub async fn setup_test_app() -> TestApp {
    TestAppBuilder::new().build().await
}
