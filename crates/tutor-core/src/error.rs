//! Error types for pricing computations.

/// Result type for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors that can occur when computing a pricing quote.
///
/// Every variant is an invalid-input condition: the computation itself has
/// no I/O and cannot fail once its inputs are accepted. Callers surface
/// these as bad-request errors rather than clamping the inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// Lesson count must be at least 1.
    #[error("invalid lesson count: {lessons} (must be at least 1)")]
    InvalidLessonCount {
        /// The rejected lesson count.
        lessons: u32,
    },

    /// Unit price must be a finite, non-negative number.
    #[error("invalid unit price: {unit_price}")]
    InvalidUnitPrice {
        /// The rejected unit price.
        unit_price: f64,
    },

    /// A discount schedule must contain at least one tier.
    #[error("discount schedule is empty")]
    EmptySchedule,

    /// Tier minimums must be strictly increasing and start at 1 or above.
    #[error("discount schedule out of order at tier {index}: min_lessons {min_lessons}")]
    UnsortedSchedule {
        /// Index of the offending tier.
        index: usize,
        /// The offending minimum lesson count.
        min_lessons: u32,
    },

    /// Discount percentages must lie in `[0, 100)` and never decrease as
    /// tier minimums increase.
    #[error("invalid discount percentage at tier {index}: {discount_pct}")]
    InvalidDiscount {
        /// Index of the offending tier.
        index: usize,
        /// The offending percentage.
        discount_pct: f64,
    },
}
