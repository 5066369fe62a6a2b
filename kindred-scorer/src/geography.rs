//! Geography factor: normalised free-text location matching.
//!
//! Locations are conventionally "City, Country". Matching is textual:
//! lowercase the string, split on commas, trim each segment. An exact
//! segment-for-segment match scores full marks; sharing only the trailing
//! country/region segment scores partially.

use crate::Assessment;

/// Value substituted when either side has no location.
pub(crate) const UNKNOWN_DEFAULT: f32 = 0.5;
/// Value for an exact normalised match.
const SAME_LOCATION: f32 = 1.0;
/// Value when only the trailing country/region segment matches.
const SAME_REGION: f32 = 0.7;
/// Value when the locations share nothing.
const DIFFERENT: f32 = 0.3;

const SAME_AREA_REASON: &str = "You're in the same area";

pub(crate) fn assess(a: Option<&str>, b: Option<&str>) -> Assessment {
    let (Some(lhs), Some(rhs)) = (a, b) else {
        return Assessment::silent(UNKNOWN_DEFAULT);
    };

    let lhs_segments = normalise(lhs);
    let rhs_segments = normalise(rhs);

    if lhs_segments == rhs_segments {
        return Assessment {
            value: SAME_LOCATION,
            reason: Some(SAME_AREA_REASON.to_owned()),
        };
    }
    if lhs_segments.len() > 1
        && rhs_segments.len() > 1
        && lhs_segments.last() == rhs_segments.last()
    {
        return Assessment::silent(SAME_REGION);
    }
    Assessment::silent(DIFFERENT)
}

/// Lowercase a location and split it into trimmed comma segments.
fn normalise(location: &str) -> Vec<String> {
    location
        .split(',')
        .map(|segment| segment.trim().to_lowercase())
        .collect()
}
