use std::sync::Arc;

use axum::{extract::State, Json};
use petadopt_core::models::NewAdoptionRequest;
use serde::Serialize;
use validator::Validate;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionResponse {
    pub success: bool,
    pub message: String,
    pub request_id: i64,
}

#[tracing::instrument(skip(state, request), fields(operation = "submit_adoption_request"))]
pub async fn submit_adoption_request(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<NewAdoptionRequest>,
) -> Result<Json<AdoptionResponse>, HttpAppError> {
    let request = request.normalized();
    request.validate()?;

    let saved = state.adoption_repository.create_request(request).await?;
    tracing::info!(request_id = saved.id, pet_name = %saved.pet_name, "Adoption request received");

    Ok(Json(AdoptionResponse {
        success: true,
        message: "Adoption request submitted successfully".to_string(),
        request_id: saved.id,
    }))
}
