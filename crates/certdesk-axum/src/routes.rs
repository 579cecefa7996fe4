//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `AppCore` facade.

use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under /api).
///
/// Auth endpoints are served both at the top level and under `/auth`.
pub(crate) fn api_routes() -> Router<AppState> {
    let auth = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/me", get(handlers::auth::me));

    Router::new()
        // Auth API
        .merge(auth.clone())
        .nest("/auth", auth)
        // Users API
        .route(
            "/users/me",
            get(handlers::users::get_me)
                .put(handlers::users::update_me)
                .delete(handlers::users::delete_me),
        )
        .route("/users/me/password", put(handlers::users::change_password))
        .route("/users/all", get(handlers::users::list))
        .route("/users/{id}", get(handlers::users::get))
        // Payments API
        .route("/payment", post(handlers::payments::create))
        .route("/verify-payment", post(handlers::payments::verify))
        .route("/payments", get(handlers::payments::list_mine))
        // Documents API
        .route(
            "/generate-certificate",
            post(handlers::documents::generate_certificate),
        )
        .route(
            "/generate-testimonial",
            post(handlers::documents::generate_testimonial),
        )
        .route("/verify-ref", post(handlers::documents::verify_ref))
        .route(
            "/documents",
            get(handlers::documents::list).post(handlers::documents::create),
        )
        .route(
            "/academic-record",
            get(handlers::documents::academic_record),
        )
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Json<Value> {
    Json(json!({"msg": "Hello, World!"}))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
