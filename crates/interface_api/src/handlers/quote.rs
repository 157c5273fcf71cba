//! Quote lifecycle handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain_quote::{QuoteApplication, QuoteError};
use infra_db::NewQuoteRecord;

use crate::dto::quote::*;
use crate::{error::ApiError, AppState};

/// Creates a new quote
///
/// Validates required-field presence, computes the premium under the
/// configured rate profile, and persists the record. The premium is always
/// server-computed; any premium in the request body is ignored.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<CreateQuoteRequest>,
) -> Result<(StatusCode, Json<CreateQuoteResponse>), ApiError> {
    let application = QuoteApplication::try_from(request)?.validate()?;

    let premium = state.profile.premium(
        &application.insurance_type,
        &application.coverage_amount,
        application.age,
    )?;

    let record = state
        .store
        .create(NewQuoteRecord::from_application(application, premium))
        .await?;

    tracing::info!(id = record.id, insurance_type = %record.insurance_type, "quote created");

    Ok((
        StatusCode::CREATED,
        Json(CreateQuoteResponse {
            message: "Quote created successfully".to_string(),
            quote: record.into(),
        }),
    ))
}

/// Lists all quotes, newest first
pub async fn list_quotes(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuoteResponse>>, ApiError> {
    let quotes = state.store.list().await?;
    Ok(Json(quotes.into_iter().map(QuoteResponse::from).collect()))
}

/// Gets a quote by id
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state.store.get(id).await?;
    Ok(Json(quote.into()))
}

/// Updates a quote's status
///
/// The supplied status is stored verbatim; there is no allowed-value check
/// and no state machine.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let status = request
        .status
        .ok_or_else(|| QuoteError::missing("status"))?;

    let quote = state.store.update_status(id, &status).await?;

    tracing::info!(id, status = %quote.status, "quote status updated");

    Ok(Json(quote.into()))
}

/// Deletes a quote permanently
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete(id).await?;

    tracing::info!(id, "quote deleted");

    Ok(Json(MessageResponse {
        message: "Quote deleted successfully".to_string(),
    }))
}
