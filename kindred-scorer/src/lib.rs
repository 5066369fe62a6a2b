//! Compatibility scoring for pairs of profile snapshots.
//!
//! The crate provides the canonical [`CompatibilityScorer`]: five named
//! factor sub-scorers — personality, interests, geography, demographics,
//! and activity recency — composed by one orchestrator. Each factor is a
//! pure function returning a normalised value in `0.0..=1.0` plus an
//! optional human-readable reason; the orchestrator weighs the values with
//! [`FactorWeights`], clamps the total into the score range via the
//! [`Scorer`] trait, and keeps at most three reasons in evaluation order.
//!
//! Scoring is deterministic: activity recency is measured against a
//! reference instant captured once by the caller, never an ambient clock
//! read, so identical inputs always yield identical output. Factors never
//! fail on absent optional data — each substitutes its documented neutral
//! default instead.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use kindred_core::{Interest, ProfileSnapshot, Scorer};
//! use kindred_scorer::CompatibilityScorer;
//!
//! # fn main() -> Result<(), kindred_core::InterestError> {
//! let reference = Utc
//!     .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
//!     .single()
//!     .expect("valid instant");
//! let scorer = CompatibilityScorer::with_defaults(reference);
//!
//! let a = ProfileSnapshot::new()
//!     .with_location("Nairobi, Kenya")
//!     .with_interest(Interest::new("music", 4)?);
//! let b = ProfileSnapshot::new()
//!     .with_location("Nairobi, Kenya")
//!     .with_interest(Interest::new("music", 5)?);
//!
//! let result = scorer.score(&a, &b);
//! assert!(result.score() > 0.0);
//! assert!(
//!     result
//!         .reasons()
//!         .iter()
//!         .any(|reason| reason.contains("music"))
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod activity;
mod demographics;
mod geography;
mod interests;
mod personality;
mod weights;

pub use weights::{FactorWeights, ScoringError};

use chrono::{DateTime, Utc};
use kindred_core::{CompatibilityResult, ProfileSnapshot, Scorer};

/// Outcome of one factor sub-scorer: a normalised value in `0.0..=1.0`
/// plus a reason when the factor crossed its notable threshold.
pub(crate) struct Assessment {
    pub(crate) value: f32,
    pub(crate) reason: Option<String>,
}

impl Assessment {
    /// An assessment that contributes a value without a reason.
    pub(crate) const fn silent(value: f32) -> Self {
        Self {
            value,
            reason: None,
        }
    }
}

/// Weighted points each factor contributed to a score.
///
/// Produced by [`CompatibilityScorer::score_with_breakdown`] so callers
/// can surface per-factor detail alongside the clamped total.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorBreakdown {
    /// Points from the personality blend.
    pub personality: f32,
    /// Points from interest overlap.
    pub interests: f32,
    /// Points from geographic proximity.
    pub geography: f32,
    /// Points from age and mutual-preference fit.
    pub demographics: f32,
    /// Points from recency of activity.
    pub activity: f32,
}

impl FactorBreakdown {
    /// Sum of all factor points, before clamping.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the breakdown total is a sum of factor points"
    )]
    pub fn total(self) -> f32 {
        self.personality + self.interests + self.geography + self.demographics + self.activity
    }
}

/// A compatibility result together with its per-factor breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCompatibility {
    /// Clamped score and reasons.
    pub result: CompatibilityResult,
    /// Weighted points per factor.
    pub breakdown: FactorBreakdown,
}

/// Deterministic five-factor compatibility scorer.
///
/// Holds validated [`FactorWeights`] and the reference instant that
/// activity recency is measured against. Callers capture the instant once
/// per batch so every pair in the batch is judged against the same clock
/// reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompatibilityScorer {
    weights: FactorWeights,
    reference: DateTime<Utc>,
}

impl CompatibilityScorer {
    /// Construct a scorer with the default factor weights.
    #[must_use]
    pub fn with_defaults(reference: DateTime<Utc>) -> Self {
        Self {
            weights: FactorWeights::default(),
            reference,
        }
    }

    /// Construct a scorer from caller-supplied weights.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when a weight is
    /// non-finite or negative, or the total budget is zero.
    pub fn from_weights(
        weights: FactorWeights,
        reference: DateTime<Utc>,
    ) -> Result<Self, ScoringError> {
        Ok(Self {
            weights: weights.validate()?,
            reference,
        })
    }

    /// Factor weights in use.
    #[must_use]
    pub const fn weights(&self) -> FactorWeights {
        self.weights
    }

    /// Reference instant activity recency is measured against.
    #[must_use]
    pub const fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Score a pair and expose the weighted points per factor.
    ///
    /// Factors are evaluated in a fixed order — personality, interests,
    /// geography, demographics, activity — and reasons are collected in
    /// that order before truncation.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "factor values are weighted into point budgets"
    )]
    pub fn score_with_breakdown(
        &self,
        a: &ProfileSnapshot,
        b: &ProfileSnapshot,
    ) -> ScoredCompatibility {
        let personality = personality::assess(a.personality, b.personality);
        let interests = interests::assess(&a.interests, &b.interests);
        let geography = geography::assess(a.location.as_deref(), b.location.as_deref());
        let demographics = demographics::assess(a, b);
        let activity = activity::assess(self.reference, a.last_active, b.last_active);

        let breakdown = FactorBreakdown {
            personality: self.weights.personality * personality.value,
            interests: self.weights.interests * interests.value,
            geography: self.weights.geography * geography.value,
            demographics: self.weights.demographics * demographics.value,
            activity: self.weights.activity * activity.value,
        };

        let reasons: Vec<String> = [
            personality.reason,
            interests.reason,
            geography.reason,
            demographics.reason,
            activity.reason,
        ]
        .into_iter()
        .flatten()
        .collect();

        let score = <Self as Scorer>::sanitise(breakdown.total());
        ScoredCompatibility {
            result: CompatibilityResult::new(score, reasons),
            breakdown,
        }
    }
}

impl Scorer for CompatibilityScorer {
    fn score(&self, a: &ProfileSnapshot, b: &ProfileSnapshot) -> CompatibilityResult {
        self.score_with_breakdown(a, b).result
    }
}
