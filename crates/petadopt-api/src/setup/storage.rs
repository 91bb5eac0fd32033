//! Storage setup and initialization

use anyhow::{Context, Result};
use petadopt_core::Config;
use petadopt_storage::{create_storage, Storage};
use std::sync::Arc;

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing asset storage...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize asset storage")?;
    tracing::info!(
        backend = %storage.backend_type(),
        upload_dir = %config.upload_dir,
        base_url = %config.upload_base_url,
        "Asset storage initialized successfully"
    );
    Ok(storage)
}
