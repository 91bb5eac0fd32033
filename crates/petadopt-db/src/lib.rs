//! Petadopt Database Library
//!
//! PostgreSQL repositories for pets, adoption requests, partner
//! registrations and user accounts, behind traits so the API crate can run against
//! in-memory implementations in tests.

pub mod db;

pub use db::*;
