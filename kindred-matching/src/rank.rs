//! Candidate ranking for a subject profile.
//!
//! A [`Matchmaker`] owns a scorer and the ranking policy a discovery feed
//! or batch job applies around it: score every candidate, drop those below
//! the minimum, sort best-first with a deterministic tie-break, and cut
//! the list to the configured limit.

use kindred_core::{CompatibilityResult, MAX_SCORE, ProfileSnapshot, Scorer};
use log::{debug, info};

use crate::{DiversityJitter, MatchingError};

/// A candidate profile identified by the caller's user id.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Caller-side identifier of the candidate.
    pub id: u64,
    /// Snapshot to score against the subject.
    pub snapshot: ProfileSnapshot,
}

/// Policy knobs for a matchmaking run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchmakingConfig {
    /// Maximum matches returned.
    pub limit: usize,
    /// Minimum score a candidate must reach to survive.
    pub min_score: f32,
    /// Optional ranking jitter; never applied to the stored score.
    pub jitter: Option<DiversityJitter>,
}

impl MatchmakingConfig {
    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Returns [`MatchingError::ZeroLimit`] for a zero limit and
    /// [`MatchingError::InvalidMinimumScore`] when the minimum score is
    /// not finite or escapes the score range.
    pub fn validate(self) -> Result<Self, MatchingError> {
        if self.limit == 0 {
            return Err(MatchingError::ZeroLimit);
        }
        if !self.min_score.is_finite() || !(0.0..=MAX_SCORE).contains(&self.min_score) {
            return Err(MatchingError::InvalidMinimumScore {
                value: self.min_score,
            });
        }
        Ok(self)
    }
}

impl Default for MatchmakingConfig {
    fn default() -> Self {
        Self {
            limit: 20,
            min_score: 60.0,
            jitter: None,
        }
    }
}

/// A scored candidate that cleared the minimum score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    /// Candidate identifier.
    pub id: u64,
    /// Score and reasons produced by the scorer.
    pub result: CompatibilityResult,
}

/// Scores a candidate pool for one subject and applies the ranking policy.
///
/// Generic over the [`Scorer`] seam so tests can substitute a stub and
/// batch jobs can share one configured scorer.
#[derive(Debug, Clone)]
pub struct Matchmaker<S> {
    scorer: S,
    config: MatchmakingConfig,
}

impl<S: Scorer> Matchmaker<S> {
    /// Construct a matchmaker with the default configuration.
    #[must_use]
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            config: MatchmakingConfig::default(),
        }
    }

    /// Construct a matchmaker with a validated configuration.
    ///
    /// # Errors
    /// Propagates [`MatchmakingConfig::validate`] failures.
    pub fn with_config(scorer: S, config: MatchmakingConfig) -> Result<Self, MatchingError> {
        Ok(Self {
            scorer,
            config: config.validate()?,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &MatchmakingConfig {
        &self.config
    }

    /// Score, filter, sort, and truncate the candidate pool.
    ///
    /// Candidates below the minimum score are dropped; survivors sort by
    /// score descending — jittered for ranking only, when configured —
    /// with the candidate id as a deterministic tie-break.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "jitter offsets perturb the transient ranking key"
    )]
    pub fn rank(&self, subject: &ProfileSnapshot, candidates: Vec<Candidate>) -> Vec<RankedMatch> {
        let total = candidates.len();
        let mut survivors: Vec<(f32, RankedMatch)> = candidates
            .into_iter()
            .map(|candidate| {
                let result = self.scorer.score(subject, &candidate.snapshot);
                (
                    result.score(),
                    RankedMatch {
                        id: candidate.id,
                        result,
                    },
                )
            })
            .filter(|(score, _)| *score >= self.config.min_score)
            .collect();
        debug!(
            "{} of {total} candidates cleared the minimum score {}",
            survivors.len(),
            self.config.min_score
        );

        if let Some(jitter) = &self.config.jitter {
            let offsets = jitter.offsets(survivors.len());
            for ((rank_score, _), offset) in survivors.iter_mut().zip(offsets) {
                *rank_score += offset;
            }
        }

        survivors.sort_by(|(lhs_score, lhs), (rhs_score, rhs)| {
            rhs_score
                .total_cmp(lhs_score)
                .then_with(|| lhs.id.cmp(&rhs.id))
        });
        survivors.truncate(self.config.limit);

        let ranked: Vec<RankedMatch> = survivors
            .into_iter()
            .map(|(_, matched)| matched)
            .collect();
        info!("matchmaking kept {} of {total} candidates", ranked.len());
        ranked
    }
}
