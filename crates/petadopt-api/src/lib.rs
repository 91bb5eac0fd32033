//! Petadopt API Library
//!
//! This crate provides the HTTP handlers, the catalog and ingestion services,
//! and application setup.

pub mod constants;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::{CatalogError, CatalogService, IngestionError, PetIngestionService};
pub use state::AppState;
