//! API index and health check handlers.

use axum::Json;
use serde::Serialize;

/// API index response.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    /// API name.
    pub name: String,
    /// API version.
    pub version: String,
    /// Short description.
    pub description: String,
    /// Available endpoints.
    pub endpoints: Vec<String>,
}

/// Root endpoint with API information.
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: "English Tutor API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "API for the English Tutor Website".to_string(),
        endpoints: vec![
            "/about".to_string(),
            "/services".to_string(),
            "/pricing".to_string(),
            "/pricing/quote".to_string(),
            "/testimonials".to_string(),
            "/faq".to_string(),
            "/lessons".to_string(),
        ],
    })
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "tutor-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
