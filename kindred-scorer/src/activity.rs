//! Activity factor: how recently both partners were active.
//!
//! Recency is measured in whole hours against the scorer's reference
//! instant; future instants count as zero hours ago. Both sides must fall
//! inside a window for it to apply.

use chrono::{DateTime, Utc};

use crate::Assessment;

/// Value substituted when either side's last-active instant is unknown.
pub(crate) const UNKNOWN_DEFAULT: f32 = 0.3;

const WITHIN_DAY: f32 = 1.0;
const WITHIN_THREE_DAYS: f32 = 0.8;
const WITHIN_WEEK: f32 = 0.6;
const STALE: f32 = 0.3;

const DAY_HOURS: i64 = 24;
const THREE_DAYS_HOURS: i64 = 72;
const WEEK_HOURS: i64 = 168;

pub(crate) fn assess(
    reference: DateTime<Utc>,
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
) -> Assessment {
    let (Some(lhs), Some(rhs)) = (a, b) else {
        return Assessment::silent(UNKNOWN_DEFAULT);
    };

    let lhs_hours = hours_since(reference, lhs);
    let rhs_hours = hours_since(reference, rhs);

    let value = if lhs_hours < DAY_HOURS && rhs_hours < DAY_HOURS {
        WITHIN_DAY
    } else if lhs_hours < THREE_DAYS_HOURS && rhs_hours < THREE_DAYS_HOURS {
        WITHIN_THREE_DAYS
    } else if lhs_hours < WEEK_HOURS && rhs_hours < WEEK_HOURS {
        WITHIN_WEEK
    } else {
        STALE
    };
    Assessment::silent(value)
}

/// Whole hours between the reference instant and a last-active instant;
/// future instants count as zero.
fn hours_since(reference: DateTime<Utc>, seen: DateTime<Utc>) -> i64 {
    (reference - seen).num_hours().max(0)
}
