//! Volume-discount pricing for lesson packages.
//!
//! This module implements the subscription discount calculator: a pure
//! function from `(unit price, lesson count)` to a full pricing breakdown,
//! driven by an ordered table of discount tiers.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// Upper bound of the lesson-count slider on the pricing page.
///
/// The calculator itself accepts any count of 1 or more; this constant is
/// the interactive range consumers are expected to offer.
pub const MAX_SLIDER_LESSONS: u32 = 24;

/// One volume-discount bracket.
///
/// The discount applies to any package of `min_lessons` or more lessons,
/// until a higher bracket is reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Inclusive lower bound of lessons purchased.
    pub min_lessons: u32,

    /// Percentage off the unit price, in `[0, 100)`.
    pub discount_pct: f64,
}

impl DiscountTier {
    /// Create a new tier.
    #[must_use]
    pub fn new(min_lessons: u32, discount_pct: f64) -> Self {
        Self {
            min_lessons,
            discount_pct,
        }
    }
}

/// A validated, ordered table of discount tiers.
///
/// Tiers are strictly increasing by `min_lessons` and their percentages
/// never decrease (bigger packages never get a worse rate). The schedule is
/// immutable once constructed; it is business configuration, not user data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiscountTier>", into = "Vec<DiscountTier>")]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl Default for DiscountSchedule {
    /// The business schedule: no discount up to 3 lessons, then 5% from 4,
    /// 10% from 8, 15% from 12, and 20% from 20 lessons.
    fn default() -> Self {
        Self {
            tiers: vec![
                DiscountTier::new(1, 0.0),
                DiscountTier::new(4, 5.0),
                DiscountTier::new(8, 10.0),
                DiscountTier::new(12, 15.0),
                DiscountTier::new(20, 20.0),
            ],
        }
    }
}

impl DiscountSchedule {
    /// Build a schedule from an ordered list of tiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, if `min_lessons` is not
    /// strictly increasing (or starts at 0), or if any percentage is outside
    /// `[0, 100)` or decreases from the previous tier.
    pub fn new(tiers: Vec<DiscountTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(PricingError::EmptySchedule);
        }

        let mut previous_min = 0u32;
        let mut previous_pct = 0.0f64;
        for (index, tier) in tiers.iter().enumerate() {
            if tier.min_lessons <= previous_min {
                return Err(PricingError::UnsortedSchedule {
                    index,
                    min_lessons: tier.min_lessons,
                });
            }
            if !tier.discount_pct.is_finite()
                || tier.discount_pct < previous_pct
                || tier.discount_pct >= 100.0
            {
                return Err(PricingError::InvalidDiscount {
                    index,
                    discount_pct: tier.discount_pct,
                });
            }
            previous_min = tier.min_lessons;
            previous_pct = tier.discount_pct;
        }

        Ok(Self { tiers })
    }

    /// The tiers, ordered by ascending `min_lessons`.
    #[must_use]
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// The percentage applied to a package of `lessons` lessons.
    ///
    /// Selects the highest bracket whose minimum is reached; 0 if the count
    /// is below every tier.
    #[must_use]
    pub fn discount_for(&self, lessons: u32) -> f64 {
        self.tiers
            .iter()
            .rev()
            .find(|tier| lessons >= tier.min_lessons)
            .map_or(0.0, |tier| tier.discount_pct)
    }

    /// Compute the full pricing breakdown for a package.
    ///
    /// The discounted total is rounded half-away-from-zero to 2 decimals;
    /// savings and the per-lesson price are derived from the rounded total,
    /// so `savings + discounted_total` matches `original_total` only up to
    /// that rounding. This mirrors how the pricing page has always displayed
    /// the numbers and is kept as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if `lessons` is 0, or if `unit_price` is negative,
    /// not finite, or so large the package total overflows.
    pub fn quote(&self, unit_price: f64, lessons: u32) -> Result<PricingQuote> {
        if lessons == 0 {
            return Err(PricingError::InvalidLessonCount { lessons });
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(PricingError::InvalidUnitPrice { unit_price });
        }

        let discount_pct = self.discount_for(lessons);
        let original_total = unit_price * f64::from(lessons);
        // A finite price can still overflow once multiplied out; reject it
        // here so no field downstream ever holds inf or NaN.
        if !original_total.is_finite() {
            return Err(PricingError::InvalidUnitPrice { unit_price });
        }
        let discounted_total = round2(original_total * (1.0 - discount_pct / 100.0));

        Ok(PricingQuote {
            unit_price,
            lessons,
            original_total,
            discount_pct,
            discounted_total,
            savings: original_total - discounted_total,
            price_per_lesson: discounted_total / f64::from(lessons),
        })
    }
}

impl TryFrom<Vec<DiscountTier>> for DiscountSchedule {
    type Error = PricingError;

    fn try_from(tiers: Vec<DiscountTier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<DiscountSchedule> for Vec<DiscountTier> {
    fn from(schedule: DiscountSchedule) -> Self {
        schedule.tiers
    }
}

/// A pricing breakdown for one lesson package.
///
/// Derived fresh from its inputs on every call; it has no identity beyond
/// the `(unit_price, lessons)` pair that produced it and is never stored.
/// All fields are raw numbers; currency formatting is the consumer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingQuote {
    /// Price of one lesson before any discount.
    pub unit_price: f64,

    /// Number of lessons in the package.
    pub lessons: u32,

    /// `unit_price × lessons`, before discount.
    pub original_total: f64,

    /// Percentage taken off, from the matching tier (0 when no tier applies).
    pub discount_pct: f64,

    /// Discounted package price, rounded to 2 decimals.
    pub discounted_total: f64,

    /// `original_total − discounted_total`.
    pub savings: f64,

    /// `discounted_total ÷ lessons`.
    pub price_per_lesson: f64,
}

/// Round to 2 decimal places, half away from zero (currency rounding).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
