//! # stride-api: REST API for the Stride Storefront
//!
//! Axum HTTP server over [`stride_core`] and [`stride_db`].
//!
//! ## Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/auth/register     create account, issue token                │
//! │  POST /api/auth/login        verify credentials, issue token            │
//! │  GET  /api/auth/me           profile of the bearer            [auth]    │
//! │  GET  /api/products          full catalog, newest first                 │
//! │  GET  /api/products/:id      product + per-size stock                   │
//! │  GET  /api/categories        all categories                             │
//! │  POST /api/orders            the order transaction            [auth]    │
//! │  GET  /api/orders            caller's orders with lines       [auth]    │
//! │  GET  /api/health            liveness                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use stride_db::Database;

use crate::auth::JwtManager;

/// Shared application state, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt: Arc<JwtManager>,
}

impl AppState {
    pub fn new(db: Database, jwt: JwtManager) -> Self {
        AppState {
            db,
            jwt: Arc::new(jwt),
        }
    }
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::auth::router())
        .merge(routes::catalog::router())
        .merge(routes::orders::router())
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
