//! Domain models
//!
//! Persisted records and the request shapes that create them.

pub mod adoption;
pub mod partner;
pub mod pet;
pub mod user;

pub use adoption::{AdoptionRequest, NewAdoptionRequest};
pub use partner::{NewPartnerRequest, PartnerRequest};
pub use pet::{NewPet, PetRecord};
pub use user::{LoginRequest, NewUserRequest, UserRecord};
