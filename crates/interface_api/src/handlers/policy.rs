//! Policy handlers
//!
//! Thin translation layer: validate the DTO, call the service, map the
//! result. All domain rules (uniqueness, transitions, filter resolution)
//! live in `domain_policy`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::PolicyId;

use crate::dto::policy::{
    CreatePolicyRequest, ListPoliciesQuery, PolicyResponse, UpdatePolicyStatusRequest,
};
use crate::error::ApiError;
use crate::AppState;

/// POST /api/policies
pub async fn create_policy(
    State(state): State<AppState>,
    Json(payload): Json<CreatePolicyRequest>,
) -> Result<(StatusCode, Json<PolicyResponse>), ApiError> {
    payload.validate()?;

    let policy = state.service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(policy.into())))
}

/// GET /api/policies
pub async fn list_policies(
    State(state): State<AppState>,
    Query(query): Query<ListPoliciesQuery>,
) -> Result<Json<Vec<PolicyResponse>>, ApiError> {
    let policies = state.service.find_all(query.into()).await?;
    Ok(Json(policies.into_iter().map(PolicyResponse::from).collect()))
}

/// GET /api/policies/:id
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state.service.find_one(id).await?;
    Ok(Json(policy.into()))
}

/// PUT /api/policies/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
    Json(payload): Json<UpdatePolicyStatusRequest>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state.service.update_status(id, payload.status).await?;
    Ok(Json(policy.into()))
}
