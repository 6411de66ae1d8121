//! Data model for the site content served by the API.
//!
//! These are the wire shapes the frontend consumes. Field names on the wire
//! are kept exactly as the frontend expects them (`basePrice` is camelCase,
//! everything else snake_case). The API serves this content as-is; it does
//! not validate or sanitize it.

use serde::{Deserialize, Serialize};

/// Body of the about page, as markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    /// Markdown content.
    pub content: String,
}

/// One tutoring service offered (e.g. conversation practice, exam prep).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Stable identifier used by the contact form.
    pub id: String,

    /// Icon name rendered next to the title.
    pub icon: String,

    /// Display title.
    pub title: String,

    /// Short description.
    pub description: String,

    /// Price of one lesson of this service, before any discount.
    #[serde(rename = "basePrice")]
    pub base_price: f64,
}

/// A pre-built lesson package shown on the pricing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    /// Package name (e.g. "Starter").
    pub name: String,

    /// Number of lessons included.
    pub lessons: u32,

    /// Package price after discount.
    pub price: f64,

    /// Discount percentage baked into the price.
    pub discount_pct: f64,
}

/// A student testimonial shown in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// The quoted text.
    pub quote: String,

    /// Who said it.
    pub author: String,
}

/// One question/answer pair for the FAQ accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// The question.
    pub question: String,

    /// The answer.
    pub answer: String,
}

/// A preview card for the lessons page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPreview {
    /// URL of the preview image.
    pub image_url: String,

    /// Topic chips overlaid on the card.
    pub chips: Vec<String>,

    /// Caption under the image.
    pub caption: String,
}
