//! Subscription pricing quote handler.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use tutor_core::PricingQuote;

use crate::error::ApiError;
use crate::state::AppState;

/// Quote query parameters.
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    /// Price of one lesson before discount.
    pub unit_price: f64,
    /// Number of lessons in the package.
    pub lessons: u32,
}

/// Compute a subscription pricing quote.
///
/// `GET /pricing/quote?unit_price=45&lessons=4`
///
/// The breakdown is computed with the service's configured discount
/// schedule. Raw numbers only; the frontend formats them as currency and
/// hides the discount row when the percentage is 0.
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<PricingQuote>, ApiError> {
    let quote = state
        .config
        .discounts
        .quote(query.unit_price, query.lessons)?;

    tracing::debug!(
        unit_price = quote.unit_price,
        lessons = quote.lessons,
        discount_pct = quote.discount_pct,
        "Computed pricing quote"
    );

    Ok(Json(quote))
}
