//! Database repositories for data access layer
//!
//! Each repository owns a connection pool and is responsible for one table.
//! The `*RepositoryTrait` traits are what the API layer depends on.

pub mod adoption;
pub mod partner;
pub mod pet;
pub mod user;

#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;

pub use adoption::{AdoptionRepository, AdoptionRepositoryTrait};
pub use partner::{PartnerRepository, PartnerRepositoryTrait};
pub use pet::{select_pets_sql, PetRepository, PetRepositoryTrait};
pub use user::{UserRepository, UserRepositoryTrait};

#[cfg(any(test, feature = "test-helpers"))]
pub use memory::{
    InMemoryAdoptionRepository, InMemoryPartnerRepository, InMemoryPetRepository,
    InMemoryUserRepository,
};
