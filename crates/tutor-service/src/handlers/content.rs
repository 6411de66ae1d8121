//! Content handlers.
//!
//! Each endpoint reads the backing file fresh and returns it as JSON.
//! Missing or empty content is a 404, matching what the frontend expects
//! when a section has nothing to show.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use tutor_content::ContentStore;
use tutor_core::{AboutContent, FaqItem, LessonPreview, PricingPlan, ServiceItem, Testimonial};

use crate::error::ApiError;
use crate::state::AppState;

/// Reject empty collections so the frontend gets a 404 instead of `[]`.
fn non_empty<T>(items: Vec<T>, entity: &str) -> Result<Vec<T>, ApiError> {
    if items.is_empty() {
        return Err(ApiError::NotFound(format!("{entity} not found")));
    }
    Ok(items)
}

/// Get the about page content.
pub async fn get_about(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AboutContent>, ApiError> {
    let content = state.store.load_about()?;
    if content.trim().is_empty() {
        return Err(ApiError::NotFound("About content not found".into()));
    }
    Ok(Json(AboutContent { content }))
}

/// Get all services.
pub async fn get_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ServiceItem>>, ApiError> {
    let services = state.store.load_services()?;
    Ok(Json(non_empty(services, "Services")?))
}

/// Get all pricing plans.
pub async fn get_pricing(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PricingPlan>>, ApiError> {
    let plans = state.store.load_pricing()?;
    Ok(Json(non_empty(plans, "Pricing plans")?))
}

/// Get all testimonials.
pub async fn get_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let testimonials = state.store.load_testimonials()?;
    Ok(Json(non_empty(testimonials, "Testimonials")?))
}

/// Get all FAQ items.
pub async fn get_faq(State(state): State<Arc<AppState>>) -> Result<Json<Vec<FaqItem>>, ApiError> {
    let faq = state.store.load_faq()?;
    Ok(Json(non_empty(faq, "FAQ items")?))
}

/// Get all lesson previews.
pub async fn get_lessons(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LessonPreview>>, ApiError> {
    let lessons = state.store.load_lessons()?;
    Ok(Json(non_empty(lessons, "Lesson previews")?))
}
