//! Application state shared by every handler.

use petadopt_core::{Config, SubmissionValidator};
use petadopt_db::{
    AdoptionRepositoryTrait, PartnerRepositoryTrait, PetRepositoryTrait, UserRepositoryTrait,
};
use petadopt_storage::Storage;
use std::sync::Arc;

use crate::services::{CatalogService, PetIngestionService};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub ingestion: PetIngestionService,
    pub adoption_repository: Arc<dyn AdoptionRepositoryTrait>,
    pub partner_repository: Arc<dyn PartnerRepositoryTrait>,
    pub user_repository: Arc<dyn UserRepositoryTrait>,
}

impl AppState {
    /// Wire services over the given collaborators.
    pub fn new(
        config: &Config,
        pets: Arc<dyn PetRepositoryTrait>,
        storage: Arc<dyn Storage>,
        adoption_repository: Arc<dyn AdoptionRepositoryTrait>,
        partner_repository: Arc<dyn PartnerRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        let validator = SubmissionValidator::new(config.pet_photo_allowed_extensions.clone());
        Self {
            catalog: CatalogService::new(pets.clone()),
            ingestion: PetIngestionService::new(validator, storage, pets),
            adoption_repository,
            partner_repository,
            user_repository,
        }
    }
}
