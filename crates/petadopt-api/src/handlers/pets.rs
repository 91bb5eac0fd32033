use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use petadopt_core::FilterCriteria;
use serde::Serialize;

use crate::error::HttpAppError;
use crate::services::PetListing;
use crate::state::AppState;
use crate::utils::upload::extract_submission;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPetResponse {
    pub success: bool,
    pub message: String,
    pub pet_id: i64,
    pub image_url: String,
}

/// List pets matching the optional `type`, `breed`, `size`, `age` and
/// `location` query parameters. Other parameters are ignored.
#[tracing::instrument(skip(state, params), fields(operation = "list_pets"))]
pub async fn list_pets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<PetListing>>, HttpAppError> {
    let criteria = FilterCriteria::from_pairs(params);
    let pets = state.catalog.list_pets(&criteria).await?;
    Ok(Json(pets))
}

/// Register a pet from a multipart form: eight text fields plus `photo`.
#[tracing::instrument(skip(state, multipart), fields(operation = "register_pet"))]
pub async fn register_pet(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<RegisterPetResponse>, HttpAppError> {
    let payload = extract_submission(multipart).await?;
    let pet = state.ingestion.ingest(payload).await?;

    Ok(Json(RegisterPetResponse {
        success: true,
        message: "Pet registered successfully".to_string(),
        pet_id: pet.id,
        image_url: pet.photo_reference.unwrap_or_default(),
    }))
}
