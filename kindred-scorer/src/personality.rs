//! Personality factor: a weighted blend of Big Five trait affinities.
//!
//! Agreeableness rewards a high shared average, neuroticism rewards a low
//! one, and the remaining traits reward similar levels. The blend weights
//! sum to one so the factor value stays in `0.0..=1.0`.

use kindred_core::PersonalityProfile;

use crate::Assessment;

/// Value substituted when either side lacks an assessment.
pub(crate) const MISSING_DEFAULT: f32 = 0.5;

const EXTRAVERSION_WEIGHT: f32 = 0.2;
const AGREEABLENESS_WEIGHT: f32 = 0.3;
const CONSCIENTIOUSNESS_WEIGHT: f32 = 0.2;
const NEUROTICISM_WEIGHT: f32 = 0.15;
const OPENNESS_WEIGHT: f32 = 0.15;

/// Blend value at or above which the factor is worth a reason on its own.
const NOTABLE_VALUE: f32 = 0.75;
/// Average neuroticism below which both partners count as calm.
const CALM_AVERAGE: f32 = 2.5;
/// Extraversion above which someone counts as outgoing.
const OUTGOING_TRAIT: f32 = 3.5;
/// Openness above which someone counts as adventurous.
const ADVENTUROUS_TRAIT: f32 = 4.0;

const CALM_REASON: &str = "You both handle stress well";
const OUTGOING_REASON: &str = "You're both outgoing and social";
const CREATIVE_REASON: &str = "You're both creative and adventurous";
const COMPLEMENT_REASON: &str = "Your personalities complement each other";

#[expect(
    clippy::float_arithmetic,
    reason = "the trait blend is a weighted average of bounded trait scores"
)]
pub(crate) fn assess(a: Option<PersonalityProfile>, b: Option<PersonalityProfile>) -> Assessment {
    let (Some(lhs), Some(rhs)) = (a, b) else {
        return Assessment::silent(MISSING_DEFAULT);
    };

    let extraversion =
        EXTRAVERSION_WEIGHT * (1.0 - (lhs.extraversion() - rhs.extraversion()).abs().min(2.0) / 2.0);
    let agreeableness =
        AGREEABLENESS_WEIGHT * (f32::midpoint(lhs.agreeableness(), rhs.agreeableness()) / 5.0);
    let conscientiousness = CONSCIENTIOUSNESS_WEIGHT
        * (1.0 - (lhs.conscientiousness() - rhs.conscientiousness()).abs() / 5.0);
    let neuroticism =
        NEUROTICISM_WEIGHT * (1.0 - f32::midpoint(lhs.neuroticism(), rhs.neuroticism()) / 5.0);
    let openness = OPENNESS_WEIGHT * (1.0 - (lhs.openness() - rhs.openness()).abs() / 5.0);

    let value = (extraversion + agreeableness + conscientiousness + neuroticism + openness)
        .clamp(0.0, 1.0);
    Assessment {
        value,
        reason: reason_for(lhs, rhs, value),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "notable thresholds compare trait gaps and averages"
)]
fn reason_for(lhs: PersonalityProfile, rhs: PersonalityProfile, value: f32) -> Option<String> {
    if f32::midpoint(lhs.neuroticism(), rhs.neuroticism()) < CALM_AVERAGE {
        return Some(CALM_REASON.to_owned());
    }
    if lhs.extraversion() > OUTGOING_TRAIT
        && rhs.extraversion() > OUTGOING_TRAIT
        && (lhs.extraversion() - rhs.extraversion()).abs() < 1.0
    {
        return Some(OUTGOING_REASON.to_owned());
    }
    if lhs.openness() > ADVENTUROUS_TRAIT && rhs.openness() > ADVENTUROUS_TRAIT {
        return Some(CREATIVE_REASON.to_owned());
    }
    if value >= NOTABLE_VALUE {
        return Some(COMPLEMENT_REASON.to_owned());
    }
    None
}
