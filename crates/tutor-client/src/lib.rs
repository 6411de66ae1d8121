//! Client SDK for the tutor content and pricing API.
//!
//! A thin typed wrapper over the API's GET endpoints, for server-side
//! renderers and other services that consume the site content.
//!
//! # Example
//!
//! ```no_run
//! use tutor_client::TutorClient;
//!
//! # async fn example() -> Result<(), tutor_client::ClientError> {
//! let client = TutorClient::new("http://localhost:8000");
//! let services = client.get_services().await?;
//! let quote = client.get_quote(services[0].base_price, 8).await?;
//! println!("package price: {}", quote.discounted_total);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, TutorClient};
pub use error::ClientError;
pub use types::{ApiErrorBody, ApiErrorResponse};

pub use tutor_core::{
    AboutContent, FaqItem, LessonPreview, PricingPlan, PricingQuote, ServiceItem, Testimonial,
};
