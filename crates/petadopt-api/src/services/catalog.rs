//! Catalog query service
//!
//! Compiles caller criteria, performs one read against the pet repository,
//! and fills in the placeholder image for pets without a stored photo.

use std::sync::Arc;

use petadopt_core::{
    compile, constants::PLACEHOLDER_IMAGE_URL, models::PetRecord, AppError, FilterCriteria,
};
use petadopt_db::PetRepositoryTrait;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The pet repository could not be read. Never reported as an empty result.
    #[error("Catalog unavailable: {0}")]
    Unavailable(#[source] AppError),
}

/// A pet as returned by `GET /api/pets`; `imageUrl` is never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetListing {
    pub id: i64,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub name: String,
    pub breed: String,
    pub age: String,
    pub size: String,
    pub gender: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
}

impl From<PetRecord> for PetListing {
    fn from(pet: PetRecord) -> Self {
        let image_url = pet
            .photo_reference
            .filter(|reference| !reference.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

        Self {
            id: pet.id,
            pet_type: pet.pet_type,
            name: pet.name,
            breed: pet.breed,
            age: pet.age,
            size: pet.size,
            gender: pet.gender,
            description: pet.description,
            location: pet.location,
            image_url,
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    pets: Arc<dyn PetRepositoryTrait>,
}

impl CatalogService {
    pub fn new(pets: Arc<dyn PetRepositoryTrait>) -> Self {
        Self { pets }
    }

    #[tracing::instrument(skip(self, criteria), fields(operation = "list_pets"))]
    pub async fn list_pets(&self, criteria: &FilterCriteria) -> Result<Vec<PetListing>, CatalogError> {
        let filter = compile(criteria);
        tracing::debug!(predicate = %filter.predicate(), params = filter.params().len(), "Compiled pet filter");

        let pets = self.pets.find_pets(&filter).await.map_err(|e| {
            tracing::error!(error = %e.detailed_message(), "Pet catalog read failed");
            CatalogError::Unavailable(e)
        })?;

        tracing::debug!(count = pets.len(), "Pet catalog read");
        Ok(pets.into_iter().map(PetListing::from).collect())
    }
}
