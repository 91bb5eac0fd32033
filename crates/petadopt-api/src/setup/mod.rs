//! Application setup and initialization

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use petadopt_core::Config;
use petadopt_db::{AdoptionRepository, PartnerRepository, PetRepository, UserRepository};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.is_production())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(environment = %config.environment, "Configuration loaded and validated successfully");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(
        &config,
        Arc::new(PetRepository::new(pool.clone())),
        storage,
        Arc::new(AdoptionRepository::new(pool.clone())),
        Arc::new(PartnerRepository::new(pool.clone())),
        Arc::new(UserRepository::new(pool)),
    ));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
