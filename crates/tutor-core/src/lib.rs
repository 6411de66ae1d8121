//! Core types for the tutor content and pricing API.
//!
//! This crate provides the foundational types used throughout the platform:
//!
//! - **Pricing**: `DiscountTier`, `DiscountSchedule`, `PricingQuote`
//! - **Content**: `AboutContent`, `ServiceItem`, `PricingPlan`,
//!   `Testimonial`, `FaqItem`, `LessonPreview`
//!
//! # Volume discounts
//!
//! Lesson packages are discounted by volume: the more lessons purchased in
//! one package, the larger the percentage taken off the per-lesson price.
//! The schedule is configuration, defined once and never mutated at runtime.
//! Quotes are computed fresh from `(unit price, lesson count)` on every call;
//! nothing here is cached or persisted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod content;
pub mod error;
pub mod pricing;

pub use content::{AboutContent, FaqItem, LessonPreview, PricingPlan, ServiceItem, Testimonial};
pub use error::{PricingError, Result};
pub use pricing::{DiscountSchedule, DiscountTier, PricingQuote, MAX_SLIDER_LESSONS};
