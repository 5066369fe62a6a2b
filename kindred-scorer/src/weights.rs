//! Point budgets applied to the factor sub-scorers.

use thiserror::Error;

/// Points each factor contributes at full strength.
///
/// The defaults follow the product's 40/25/20/10/5 budget, summing to
/// 100, so a perfect pair lands exactly on the score ceiling.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorWeights {
    /// Points for the personality blend.
    pub personality: f32,
    /// Points for interest overlap.
    pub interests: f32,
    /// Points for geographic proximity.
    pub geography: f32,
    /// Points for age and mutual-preference fit.
    pub demographics: f32,
    /// Points for recency of activity.
    pub activity: f32,
}

impl FactorWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when any weight is not
    /// finite or negative, or when the total budget is zero.
    pub fn validate(self) -> Result<Self, ScoringError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScoringError::InvalidWeights)
        }
    }

    /// Total points available across all factors.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the budget total is a sum of weights"
    )]
    pub const fn total(self) -> f32 {
        self.personality + self.interests + self.geography + self.demographics + self.activity
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.personality.is_finite()
            && self.interests.is_finite()
            && self.geography.is_finite()
            && self.demographics.is_finite()
            && self.activity.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.personality >= 0.0_f32
            && self.interests >= 0.0_f32
            && self.geography >= 0.0_f32
            && self.demographics >= 0.0_f32
            && self.activity >= 0.0_f32
    }

    const fn has_non_zero_total(self) -> bool {
        self.total() != 0.0_f32
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            personality: 40.0_f32,
            interests: 25.0_f32,
            geography: 20.0_f32,
            demographics: 10.0_f32,
            activity: 5.0_f32,
        }
    }
}

/// Errors raised when configuring the compatibility scorer.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ScoringError {
    /// Provided weights were unusable.
    #[error("factor weights must be finite, non-negative, and sum to a positive value")]
    InvalidWeights,
}
