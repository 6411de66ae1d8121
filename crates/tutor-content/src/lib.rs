//! Content storage layer for the tutor API.
//!
//! The site's content lives as plain files in a content directory:
//!
//! - `about.md`: about page body (markdown)
//! - `services.json`: array of [`tutor_core::ServiceItem`]
//! - `pricing.json`: array of [`tutor_core::PricingPlan`]
//! - `testimonials.json`: array of [`tutor_core::Testimonial`]
//! - `faq.json`: array of [`tutor_core::FaqItem`]
//! - `lessons.json`: array of [`tutor_core::LessonPreview`]
//!
//! Files are read fresh on every load, so edits to the content directory are
//! visible on the next request without a restart.
//!
//! # Example
//!
//! ```no_run
//! use tutor_content::{ContentStore, FileStore};
//!
//! let store = FileStore::open("./content").unwrap();
//! let services = store.load_services().unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fs;

pub use error::{ContentError, Result};
pub use fs::FileStore;

use tutor_core::{FaqItem, LessonPreview, PricingPlan, ServiceItem, Testimonial};

/// The storage trait defining all content reads.
///
/// This trait abstracts the content backend, allowing for different
/// implementations (e.g. filesystem, in-memory for testing).
pub trait ContentStore: Send + Sync {
    /// Load the about page body.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if the content is missing.
    fn load_about(&self) -> Result<String>;

    /// Load the list of offered services.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is missing or malformed.
    fn load_services(&self) -> Result<Vec<ServiceItem>>;

    /// Load the pre-built pricing plans.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is missing or malformed.
    fn load_pricing(&self) -> Result<Vec<PricingPlan>>;

    /// Load the testimonials.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is missing or malformed.
    fn load_testimonials(&self) -> Result<Vec<Testimonial>>;

    /// Load the FAQ entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is missing or malformed.
    fn load_faq(&self) -> Result<Vec<FaqItem>>;

    /// Load the lesson preview cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is missing or malformed.
    fn load_lessons(&self) -> Result<Vec<LessonPreview>>;
}
