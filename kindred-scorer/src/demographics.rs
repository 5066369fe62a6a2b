//! Demographics factor: age gap and mutual seeking preference.
//!
//! Starts from a neutral baseline, blends in an age affinity when both
//! ages are known, then applies the preference check in both directions:
//! mutual acceptance earns a boost, while a rejection in either direction
//! floors the factor regardless of how well the ages line up.

use kindred_core::ProfileSnapshot;

use crate::Assessment;

/// Neutral baseline when demographic data is absent.
pub(crate) const BASE: f32 = 0.5;
/// Age gap in years at which the age affinity reaches zero.
const AGE_GAP_LIMIT: f32 = 20.0;
/// Age gap at or below which partners count as close in age.
const CLOSE_AGE_GAP: u8 = 3;
/// Multiplier when both seeking preferences accept the other's gender.
const MUTUAL_BOOST: f32 = 1.2;
/// Multiplier when either preference rejects the other's gender.
pub(crate) const PREFERENCE_PENALTY: f32 = 0.1;

const CLOSE_AGE_REASON: &str = "You're close in age";

#[expect(
    clippy::float_arithmetic,
    reason = "age affinity blends into the baseline before preference scaling"
)]
pub(crate) fn assess(a: &ProfileSnapshot, b: &ProfileSnapshot) -> Assessment {
    let mut value = BASE;

    let age_gap = match (a.age, b.age) {
        (Some(lhs), Some(rhs)) => Some(lhs.abs_diff(rhs)),
        _ => None,
    };
    if let Some(gap) = age_gap {
        let affinity = (1.0 - f32::from(gap) / AGE_GAP_LIMIT).max(0.0);
        value = value * 0.5 + affinity * 0.5;
    }

    let mut vetoed = false;
    if let (Some(gender_a), Some(seeking_a), Some(gender_b), Some(seeking_b)) =
        (a.gender, a.seeking, b.gender, b.seeking)
    {
        if seeking_a.accepts(gender_b) && seeking_b.accepts(gender_a) {
            value = (value * MUTUAL_BOOST).min(1.0);
        } else {
            value *= PREFERENCE_PENALTY;
            vetoed = true;
        }
    }

    let reason = match age_gap {
        Some(gap) if gap <= CLOSE_AGE_GAP && !vetoed => Some(CLOSE_AGE_REASON.to_owned()),
        _ => None,
    };
    Assessment {
        value: value.clamp(0.0, 1.0),
        reason,
    }
}
