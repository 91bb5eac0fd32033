//! Petadopt Storage Library
//!
//! Binary asset storage for uploaded pet photos: the [`Storage`] trait, the
//! local filesystem backend, and collision-resistant key generation.
//!
//! # Storage key format
//!
//! Keys are `{prefix}/{asset-name}`, e.g. `pets/1718035200123-5f0c….jpg`.
//! Keys must not contain `..` or a leading `/`. A backend serves a key at
//! `{base_url}/{key}`.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{generate_asset_name, generate_storage_key};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use petadopt_core::StorageBackend;
pub use traits::{Storage, StorageError, StorageResult};
