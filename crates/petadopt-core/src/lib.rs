//! Petadopt Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! pure request logic (filter compilation and submission validation) shared by
//! the storage, database, and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use filter::{compile, CompiledFilter, FilterCriteria, FilterKey};
pub use storage_types::StorageBackend;
pub use validation::{
    Attachment, SubmissionPayload, SubmissionValidator, ValidatedSubmission, ValidationError,
};
