//! Authentication handlers

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use crate::auth::create_token;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::error::ApiError;
use crate::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    payload.validate()?;

    let user = state.users.authenticate(&payload.email, &payload.password)?;
    let access_token = create_token(
        user.id,
        &user.email,
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )?;

    info!(email = %user.email, "user logged in");
    Ok(Json(LoginResponse { access_token }))
}
