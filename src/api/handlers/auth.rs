use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::LoginRequest;
use crate::api::dtos::responses::{AdminProfile, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Plaintext credential comparison against the admins collection. This is an
/// acknowledged insecure stub: no hashing, no token, no session. The only
/// output is a one-shot success response the client keeps locally.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let admin = state
        .admin_repo
        .find_by_email_or_username(&payload.email_or_username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if admin.password != payload.password {
        return Err(AppError::Unauthorized);
    }

    info!("Admin logged in: {}", admin.username);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        admin: AdminProfile {
            username: admin.username,
            email: admin.email,
        },
    }))
}
