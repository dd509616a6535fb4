//! Bitrix24 Lead Notification Relay
//!
//! Receives CRM lifecycle webhooks from Bitrix24, fetches the referenced
//! lead via the Bitrix REST API, formats a plain-text summary and posts it
//! back into Bitrix as an internal system notification to a fixed user.
//!
//! # Modules
//!
//! - `bitrix_client`: Outbound Bitrix REST API client.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: Shared state and liveness endpoints.
//! - `models`: CRM lead data model.
//! - `notification`: Lead notification formatter.
//! - `webhook_handler`: Inbound webhook handler.
//! - `webhook_models`: Webhook envelope and acknowledgment models.

pub mod bitrix_client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notification;
pub mod webhook_handler;
pub mod webhook_models;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::handlers::AppState;

/// Builds the application router.
///
/// Shared between `main` and the integration tests so both exercise the
/// same middleware stack.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/hello-flask", get(handlers::hello_flask))
        .route("/bitrix-webhook", post(webhook_handler::bitrix_webhook))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Bitrix payloads are small; 1MB caps hostile bodies
                .layer(RequestBodyLimitLayer::new(1024 * 1024)),
        )
        .layer(CorsLayer::permissive())
}
