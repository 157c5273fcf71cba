//! Claim intake handlers
//!
//! Claims cannot be deleted; the lifecycle is file, review, update status.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain_claim::{ClaimError, ClaimSubmission};
use infra_db::NewClaimRecord;

use crate::dto::claim::*;
use crate::dto::quote::UpdateStatusRequest;
use crate::{error::ApiError, AppState};

/// Files a new claim
pub async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<CreateClaimResponse>), ApiError> {
    let submission = ClaimSubmission::from(request).validate()?;

    let record = state
        .claims
        .create(NewClaimRecord::from_submission(submission))
        .await?;

    tracing::info!(id = record.id, claim_type = %record.claim_type, "claim filed");

    Ok((
        StatusCode::CREATED,
        Json(CreateClaimResponse {
            message: "Claim submitted successfully".to_string(),
            claim: record.into(),
        }),
    ))
}

/// Lists all claims, newest first
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.list().await?;
    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Gets a claim by id
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.claims.get(id).await?;
    Ok(Json(claim.into()))
}

/// Updates a claim's status
///
/// Stored verbatim like quote status; the response carries the reduced
/// identification fields only.
pub async fn update_claim_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ClaimStatusResponse>, ApiError> {
    let status = request
        .status
        .ok_or_else(|| ClaimError::missing("status"))?;

    let claim = state.claims.update_status(id, &status).await?;

    tracing::info!(id, status = %claim.status, "claim status updated");

    Ok(Json(claim.into()))
}
