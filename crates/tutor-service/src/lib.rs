//! HTTP API service for the tutoring site.
//!
//! Serves the site content (about, services, pricing, testimonials, FAQ,
//! lessons) from a content directory and computes subscription pricing
//! quotes with the volume-discount schedule.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
