//! HTTP API Layer
//!
//! This crate provides the REST API for the quote service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Quote lifecycle, claim intake, and health endpoints
//! - **DTOs**: camelCase request/response objects
//! - **Error Handling**: Consistent `{"error": message}` responses
//!
//! Handlers are written against the `QuoteStore` port and receive the rate
//! profile through shared state, so the same router runs against PostgreSQL
//! in production and the in-memory store in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(quotes, claims, profile);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use domain_quote::RateProfile;
use infra_db::{ClaimStore, QuoteStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{claim, health, quote};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuoteStore>,
    pub claims: Arc<dyn ClaimStore>,
    pub profile: RateProfile,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Quote store implementation
/// * `claims` - Claim store implementation
/// * `profile` - Rate profile selected for this deployment
pub fn create_router(
    store: Arc<dyn QuoteStore>,
    claims: Arc<dyn ClaimStore>,
    profile: RateProfile,
) -> Router {
    let state = AppState {
        store,
        claims,
        profile,
    };

    // Both singular and plural status paths are served; clients of the two
    // original deployments disagree on which one they call.
    let api_routes = Router::new()
        .route("/quote", post(quote::create_quote))
        .route("/quote/:id", get(quote::get_quote))
        .route("/quote/:id/status", put(quote::update_status))
        .route("/quotes", get(quote::list_quotes))
        .route("/quotes/:id", delete(quote::delete_quote))
        .route("/quotes/:id/status", put(quote::update_status))
        .route("/claim", post(claim::create_claim))
        .route("/claim/:id", get(claim::get_claim))
        .route("/claim/:id/status", put(claim::update_claim_status))
        .route("/claims", get(claim::list_claims))
        .route("/health", get(health::health_check));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
