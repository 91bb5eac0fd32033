//! Configuration module
//!
//! Settings are read from the process environment (optionally seeded from a
//! `.env` file) with defaults for everything except the database URL.

use std::env;

use crate::constants::DEFAULT_PHOTO_EXTENSIONS;
use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 3000;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const PET_PHOTO_MAX_BYTES: usize = 10 * 1024 * 1024;
const UPLOAD_DIR: &str = "public/uploads";
const UPLOAD_BASE_URL: &str = "/uploads";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub storage_backend: StorageBackend,
    pub upload_dir: String,
    pub upload_base_url: String,
    pub static_dir: Option<String>,
    pub pet_photo_max_bytes: usize,
    pub pet_photo_allowed_extensions: Vec<String>,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment and validate it.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .unwrap_or(SERVER_PORT),
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            storage_backend: env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "local".to_string())
                .parse()?,
            upload_dir: env::var("UPLOAD_DIR")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UPLOAD_DIR.to_string()),
            upload_base_url: env::var("UPLOAD_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UPLOAD_BASE_URL.to_string()),
            static_dir: env::var("STATIC_DIR").ok().filter(|s| !s.is_empty()),
            pet_photo_max_bytes: env::var("PET_PHOTO_MAX_BYTES")
                .unwrap_or_else(|_| PET_PHOTO_MAX_BYTES.to_string())
                .parse()
                .unwrap_or(PET_PHOTO_MAX_BYTES),
            pet_photo_allowed_extensions: env::var("PET_PHOTO_ALLOWED_EXTENSIONS")
                .map(|s| parse_list(&s))
                .unwrap_or_else(|_| default_photo_extensions()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|s| parse_list(&s))
                .unwrap_or_else(|_| vec!["*".to_string()]),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(self.database_url.starts_with("postgres://")
            || self.database_url.starts_with("postgresql://"))
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.pet_photo_allowed_extensions.is_empty() {
            return Err(anyhow::anyhow!(
                "PET_PHOTO_ALLOWED_EXTENSIONS must list at least one extension"
            ));
        }

        if self.pet_photo_max_bytes == 0 {
            return Err(anyhow::anyhow!("PET_PHOTO_MAX_BYTES must be greater than zero"));
        }

        if !self.upload_base_url.starts_with('/') {
            return Err(anyhow::anyhow!(
                "UPLOAD_BASE_URL must be an absolute path such as /uploads"
            ));
        }

        // Nested under the router, so it can be neither the root nor end in a slash.
        if self.upload_base_url.ends_with('/') {
            return Err(anyhow::anyhow!(
                "UPLOAD_BASE_URL must not be / or end with a slash"
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

/// Split a comma-separated list, lowercasing and dropping a leading dot.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().trim_start_matches('.').to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

pub fn default_photo_extensions() -> Vec<String> {
    DEFAULT_PHOTO_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
