//! Scoring output: a bounded score plus explanatory reasons.

/// Upper bound of a compatibility score.
pub const MAX_SCORE: f32 = 100.0;

/// Maximum number of reasons kept on a result.
pub const MAX_REASONS: usize = 3;

/// Outcome of scoring two profile snapshots.
///
/// The constructor enforces the output invariants: the score is finite and
/// clamped to `0.0..=MAX_SCORE`, and at most [`MAX_REASONS`] reasons are
/// kept in the order the scorer emitted them.
///
/// # Examples
/// ```
/// use kindred_core::CompatibilityResult;
///
/// let result = CompatibilityResult::new(
///     120.0,
///     vec![
///         "You both enjoy music".to_owned(),
///         "You're in the same area".to_owned(),
///     ],
/// );
/// assert_eq!(result.score(), 100.0);
/// assert_eq!(result.reasons().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompatibilityResult {
    score: f32,
    reasons: Vec<String>,
}

impl CompatibilityResult {
    /// Construct a result, clamping the score and truncating the reasons.
    #[must_use]
    pub fn new(score: f32, mut reasons: Vec<String>) -> Self {
        reasons.truncate(MAX_REASONS);
        Self {
            score: clamp_score(score),
            reasons,
        }
    }

    /// Compatibility score in `0.0..=MAX_SCORE`.
    #[must_use]
    pub const fn score(&self) -> f32 {
        self.score
    }

    /// Human-readable reasons, ordered by factor evaluation, at most
    /// [`MAX_REASONS`] entries.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Consume the result and return the reasons.
    #[must_use]
    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }
}

/// Collapse non-finite scores to zero and clamp into `0.0..=MAX_SCORE`.
pub(crate) fn clamp_score(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE)
}
