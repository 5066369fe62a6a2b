//! Facade crate for the Kindred compatibility engine.
//!
//! This crate re-exports the core domain types and exposes the scorer and
//! matchmaking implementations behind feature flags.

#![forbid(unsafe_code)]

pub use kindred_core::{
    CompatibilityResult, Gender, Interest, InterestError, MAX_REASONS, MAX_SCORE,
    PersonalityProfile, PersonalityProfileError, ProfileSnapshot, Scorer, Seeking,
};

#[cfg(feature = "scorer")]
pub use kindred_scorer::{
    CompatibilityScorer, FactorBreakdown, FactorWeights, ScoredCompatibility, ScoringError,
};

#[cfg(feature = "matching")]
pub use kindred_matching::{
    Candidate, DiversityJitter, MatchRecord, MatchStatus, MatchingError, MatchmakingConfig,
    Matchmaker, RankedMatch, ScoreCache, SwipeAction, explain,
};
