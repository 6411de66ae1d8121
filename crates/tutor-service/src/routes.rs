//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{content, meta, quote};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// - `GET /` - API index
/// - `GET /health` - Health check
/// - `GET /about` - About page body (markdown)
/// - `GET /services` - Offered services
/// - `GET /pricing` - Pre-built pricing plans
/// - `GET /pricing/quote` - Subscription pricing quote
/// - `GET /testimonials` - Testimonials
/// - `GET /faq` - FAQ entries
/// - `GET /lessons` - Lesson preview cards
/// - `GET /content/*` - Raw content files (images referenced by previews)
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;
    let content_dir = state.config.content_dir.clone();

    // Build CORS layer
    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    Router::new()
        // Meta
        .route("/", get(meta::index))
        .route("/health", get(meta::health))
        // Content
        .route("/about", get(content::get_about))
        .route("/services", get(content::get_services))
        .route("/pricing", get(content::get_pricing))
        .route("/testimonials", get(content::get_testimonials))
        .route("/faq", get(content::get_faq))
        .route("/lessons", get(content::get_lessons))
        // Pricing quote
        .route("/pricing/quote", get(quote::get_quote))
        // Raw content files (lesson preview images and the like)
        .nest_service("/content", ServeDir::new(content_dir))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
///
/// The API is read-only, so only GET is ever allowed.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    }
}
