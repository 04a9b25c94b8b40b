//! HTTP API Layer
//!
//! REST API for the policy lifecycle core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: auth, policy, and health endpoints
//! - **Middleware**: JWT authentication and request logging
//! - **DTOs**: validated request/response data transfer objects
//! - **Error Handling**: domain errors mapped to consistent HTTP responses
//!
//! The router is built over the domain [`PolicyService`] so tests can run it
//! against the in-memory store while production wires the PostgreSQL one.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(service, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use domain_policy::PolicyService;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::UserDirectory;
use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, health, policy};
use crate::middleware::{auth_middleware, request_log_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: PolicyService,
    pub users: Arc<UserDirectory>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// `/health` and `/auth/login` are public; everything under `/api/policies`
/// requires a bearer token.
pub fn create_router(service: PolicyService, config: ApiConfig) -> Router {
    let state = AppState {
        service,
        users: Arc::new(UserDirectory::with_demo_user()),
        config,
    };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/login", post(auth_handlers::login));

    let policy_routes = Router::new()
        .route("/", post(policy::create_policy))
        .route("/", get(policy::list_policies))
        .route("/:id", get(policy::get_policy))
        .route("/:id/status", put(policy::update_status));

    let api_routes = Router::new()
        .nest("/policies", policy_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(axum_middleware::from_fn(request_log_middleware)),
        )
        .with_state(state)
}
