//! Test-only builders for profile snapshots, shared by unit and behaviour
//! tests across the workspace.

use crate::{Interest, PersonalityProfile, ProfileSnapshot};

/// Build a personality profile from the five trait scores.
///
/// # Panics
/// Panics when a trait score is outside the valid range; fixtures should
/// fail fast on bad constants.
#[expect(
    clippy::expect_used,
    reason = "test fixtures should fail fast on invalid constants"
)]
#[must_use]
pub fn personality(
    extraversion: f32,
    agreeableness: f32,
    conscientiousness: f32,
    neuroticism: f32,
    openness: f32,
) -> PersonalityProfile {
    PersonalityProfile::new(
        extraversion,
        agreeableness,
        conscientiousness,
        neuroticism,
        openness,
    )
    .expect("fixture personality must be valid")
}

/// Build the all-threes personality vector used as a neutral fixture.
#[must_use]
pub fn balanced_personality() -> PersonalityProfile {
    personality(3.0, 3.0, 3.0, 3.0, 3.0)
}

/// Build an interest from a name and level.
///
/// # Panics
/// Panics when the name is blank or the level is out of range; fixtures
/// should fail fast on bad constants.
#[expect(
    clippy::expect_used,
    reason = "test fixtures should fail fast on invalid constants"
)]
#[must_use]
pub fn interest(name: &str, level: u8) -> Interest {
    Interest::new(name, level).expect("fixture interest must be valid")
}

/// Build a snapshot carrying only the given interests.
#[must_use]
pub fn snapshot_with_interests(interests: &[(&str, u8)]) -> ProfileSnapshot {
    ProfileSnapshot::new().with_interests(
        interests
            .iter()
            .map(|&(name, level)| interest(name, level))
            .collect(),
    )
}
