//! Account registration and login over the credentials store.

use std::sync::Arc;

use axum::{extract::State, Json};
use petadopt_core::models::{LoginRequest, NewUserRequest, UserRecord};
use serde::Serialize;
use validator::Validate;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
}

#[tracing::instrument(skip(state, request), fields(operation = "register_user"))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<NewUserRequest>,
) -> Result<Json<RegisterResponse>, HttpAppError> {
    let request = request.normalized();
    request.validate()?;

    let user = state.user_repository.create_user(request).await?;
    tracing::info!(user_id = user.id, "User registered");

    Ok(Json(RegisterResponse {
        success: true,
        message: "Registration successful".to_string(),
        user_id: user.id,
    }))
}

/// Unknown credentials are a normal `success: false` answer, not an error.
#[tracing::instrument(skip(state, request), fields(operation = "login"))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpAppError> {
    request.validate()?;

    let found = state
        .user_repository
        .find_by_credentials(request.email.trim(), &request.password)
        .await?;

    let response = match found {
        Some(user) => {
            tracing::info!(user_id = user.id, "User logged in");
            LoginResponse {
                success: true,
                message: "Login successful".to_string(),
                user: Some(user),
            }
        }
        None => {
            tracing::debug!("Login rejected");
            LoginResponse {
                success: false,
                message: "Invalid credentials".to_string(),
                user: None,
            }
        }
    };

    Ok(Json(response))
}
