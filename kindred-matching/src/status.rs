//! Match lifecycle statuses and swipe actions.
//!
//! Both enums round-trip the strings used by match records.
//!
//! # Examples
//! ```
//! use kindred_matching::{MatchStatus, SwipeAction};
//!
//! assert_eq!(MatchStatus::Matched.as_str(), "matched");
//! assert_eq!(MatchStatus::after_swipe(SwipeAction::Like, true), MatchStatus::Matched);
//! ```

/// A user's swipe decision on a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeAction {
    /// Liked the candidate.
    Like,
    /// Passed on the candidate.
    Pass,
}

/// Lifecycle status of a match record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    /// Generated by a matchmaking run; neither side has acted.
    Pending,
    /// One side liked; waiting on the counterpart.
    Liked,
    /// One side passed; the pairing is closed.
    Passed,
    /// Both sides liked each other.
    Matched,
}

impl MatchStatus {
    /// Return the status as the match-record string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Liked => "liked",
            Self::Passed => "passed",
            Self::Matched => "matched",
        }
    }

    /// Status after one side swipes, given whether the counterpart has
    /// already liked.
    #[must_use]
    pub const fn after_swipe(action: SwipeAction, counterpart_liked: bool) -> Self {
        match (action, counterpart_liked) {
            (SwipeAction::Like, true) => Self::Matched,
            (SwipeAction::Like, false) => Self::Liked,
            (SwipeAction::Pass, _) => Self::Passed,
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "liked" => Ok(Self::Liked),
            "passed" => Ok(Self::Passed),
            "matched" => Ok(Self::Matched),
            _ => Err(format!("unknown match status '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests should fail fast when setup breaks"
    )]

    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(MatchStatus::Pending)]
    #[case(MatchStatus::Liked)]
    #[case(MatchStatus::Passed)]
    #[case(MatchStatus::Matched)]
    fn display_round_trips(#[case] status: MatchStatus) {
        assert_eq!(MatchStatus::from_str(&status.to_string()), Ok(status));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = MatchStatus::from_str("archived").expect_err("unknown status should not parse");
        assert!(err.contains("unknown match status"));
    }

    #[rstest]
    #[case(SwipeAction::Like, false, MatchStatus::Liked)]
    #[case(SwipeAction::Like, true, MatchStatus::Matched)]
    #[case(SwipeAction::Pass, false, MatchStatus::Passed)]
    #[case(SwipeAction::Pass, true, MatchStatus::Passed)]
    fn swipes_follow_the_transition_table(
        #[case] action: SwipeAction,
        #[case] counterpart_liked: bool,
        #[case] expected: MatchStatus,
    ) {
        assert_eq!(MatchStatus::after_swipe(action, counterpart_liked), expected);
    }
}
