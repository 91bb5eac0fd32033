//! Request-level services composed from the pure core logic and the
//! storage collaborators.

pub mod catalog;
pub mod ingestion;

pub use catalog::{CatalogError, CatalogService, PetListing};
pub use ingestion::{IngestionError, IngestionStage, PetIngestionService};
