//! Shared key generation for storage backends.
//!
//! Asset names keep the upload-time timestamp and the original extension,
//! and add a random UUID so two uploads in the same millisecond (even with the
//! same original filename) never map to one key.

use chrono::Utc;
use uuid::Uuid;

/// Name for a newly uploaded asset: `{unix_millis}-{uuid}.{extension}`.
pub fn generate_asset_name(extension: &str) -> String {
    format!(
        "{}-{}.{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        extension.trim_start_matches('.').to_lowercase()
    )
}

/// Storage key for an asset under `prefix`: `{prefix}/{name}`.
pub fn generate_storage_key(prefix: &str, name: &str) -> String {
    format!("{}/{}", prefix.trim_matches('/'), name)
}
