//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: service + database (public)
//! - `/auth/*`           - Registration, login, token refresh (public)
//! - `/patients/*`       - Patient CRUD, scoped to the caller (Bearer required)
//! - `/doctors/*`        - Doctor CRUD, global (Bearer required)
//! - `/mappings/*`       - Patient-doctor mappings (Bearer required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on credential endpoints
//! - **Authentication** - Bearer access token on resource routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let auth_router = api::routes::auth_routes();
    let auth_router = if behind_proxy {
        auth_router.layer(rate_limit::proxied_secure_layer())
    } else {
        auth_router.layer(rate_limit::secure_layer())
    };

    let resource_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let resource_router = if behind_proxy {
        resource_router.layer(rate_limit::proxied_layer())
    } else {
        resource_router.layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(auth_router)
        .merge(resource_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
