//! Persistable match records produced by batch matchmaking.

use crate::{MatchStatus, RankedMatch, SwipeAction};

/// A pairing produced by a matchmaking run, ready for the caller to
/// persist or display.
///
/// The record carries the score and the joined reasons at generation
/// time; lifecycle transitions happen through [`MatchRecord::apply_swipe`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    /// Subject the run was executed for.
    pub subject_id: u64,
    /// Candidate the subject was paired with.
    pub candidate_id: u64,
    /// Compatibility score at generation time.
    pub score: f32,
    /// Reasons joined for display, in scorer order.
    pub reason: String,
    /// Lifecycle status; batch generation starts at
    /// [`MatchStatus::Pending`].
    pub status: MatchStatus,
}

impl MatchRecord {
    /// Build pending records from a ranked run for one subject.
    #[must_use]
    pub fn pending_from_ranked(subject_id: u64, ranked: &[RankedMatch]) -> Vec<Self> {
        ranked
            .iter()
            .map(|matched| Self {
                subject_id,
                candidate_id: matched.id,
                score: matched.result.score(),
                reason: matched.result.reasons().join("; "),
                status: MatchStatus::Pending,
            })
            .collect()
    }

    /// Apply a swipe from either side, given whether the counterpart has
    /// already liked.
    pub const fn apply_swipe(&mut self, action: SwipeAction, counterpart_liked: bool) {
        self.status = MatchStatus::after_swipe(action, counterpart_liked);
    }
}
