use std::sync::Arc;

use axum::{extract::State, Json};
use petadopt_core::models::NewPartnerRequest;
use serde::Serialize;
use validator::Validate;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerResponse {
    pub success: bool,
    pub message: String,
    pub partner_id: i64,
}

#[tracing::instrument(skip(state, request), fields(operation = "register_partner"))]
pub async fn register_partner(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<NewPartnerRequest>,
) -> Result<Json<PartnerResponse>, HttpAppError> {
    let request = request.normalized();
    request.validate()?;

    let saved = state.partner_repository.create_partner(request).await?;
    tracing::info!(partner_id = saved.id, "Partnership request received");

    Ok(Json(PartnerResponse {
        success: true,
        message: "Partnership request submitted successfully".to_string(),
        partner_id: saved.id,
    }))
}
