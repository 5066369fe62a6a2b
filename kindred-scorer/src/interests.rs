//! Interest factor: level-weighted credit for mutually-shared interests.
//!
//! Each interest named by both sides earns credit scaled by the lower of
//! the two enthusiasm levels and by how close the levels are, so adding a
//! shared interest can only raise the factor. A shared-count bonus rewards
//! pairs whose lists overlap broadly relative to the larger list.

use std::collections::HashMap;

use kindred_core::Interest;

use crate::Assessment;

/// Value substituted when either side declares no interests.
pub(crate) const EMPTY_DEFAULT: f32 = 0.3;

/// Credit a fully-matched shared interest contributes; four strong shared
/// interests saturate the factor on their own.
const SHARED_CREDIT: f32 = 0.25;

/// Cap on the shared-count bonus.
const BONUS_CAP: f32 = 0.5;

/// Shared interests named in the reason, at most.
const NAMED_SHARED: usize = 2;

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "overlap credit is a bounded sum over small interest lists"
)]
pub(crate) fn assess(a: &[Interest], b: &[Interest]) -> Assessment {
    if a.is_empty() || b.is_empty() {
        return Assessment::silent(EMPTY_DEFAULT);
    }

    let b_levels: HashMap<&str, u8> = b
        .iter()
        .map(|interest| (interest.name(), interest.level()))
        .collect();

    let mut credit = 0.0_f32;
    let mut shared: Vec<&str> = Vec::new();
    for interest in a {
        let Some(&level_b) = b_levels.get(interest.name()) else {
            continue;
        };
        let level_a = interest.level();
        let closeness = 1.0 - f32::from(level_a.abs_diff(level_b)) / 5.0;
        credit += f32::from(level_a.min(level_b)) / 5.0 * closeness * SHARED_CREDIT;
        shared.push(interest.name());
    }

    let larger = a.len().max(b.len()) as f32;
    let bonus = ((shared.len() as f32) / larger).min(BONUS_CAP);
    Assessment {
        value: (credit + bonus).min(1.0),
        reason: reason_for(&shared),
    }
}

fn reason_for(shared: &[&str]) -> Option<String> {
    if shared.is_empty() {
        return None;
    }
    let named: Vec<&str> = shared.iter().copied().take(NAMED_SHARED).collect();
    Some(format!("You both enjoy {}", named.join(" and ")))
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]

    use kindred_core::test_support::interest;
    use rstest::rstest;

    use super::{EMPTY_DEFAULT, assess};

    #[rstest]
    fn empty_lists_yield_the_neutral_default() {
        let some = vec![interest("music", 4)];
        let assessment = assess(&some, &[]);
        assert!((assessment.value - EMPTY_DEFAULT).abs() < 0.000_1_f32);
        assert!(assessment.reason.is_none());

        let other_way = assess(&[], &some);
        assert!((other_way.value - EMPTY_DEFAULT).abs() < 0.000_1_f32);
    }

    #[rstest]
    fn disjoint_lists_score_zero_without_a_reason() {
        let a = vec![interest("music", 4)];
        let b = vec![interest("hiking", 4)];
        let assessment = assess(&a, &b);
        assert!(assessment.value.abs() < 0.000_1_f32);
        assert!(assessment.reason.is_none());
    }

    #[rstest]
    fn one_matched_interest_earns_credit_and_the_bonus() {
        let a = vec![interest("music", 4)];
        let b = vec![interest("music", 4)];
        let assessment = assess(&a, &b);
        // credit 0.8 * 1.0 * 0.25 = 0.2, bonus capped at 0.5
        assert!((assessment.value - 0.7_f32).abs() < 0.000_1_f32);
        assert_eq!(assessment.reason.as_deref(), Some("You both enjoy music"));
    }

    #[rstest]
    fn level_gaps_discount_the_credit() {
        let a = vec![interest("music", 1)];
        let b = vec![interest("music", 5)];
        let assessment = assess(&a, &b);
        // credit (1/5) * (1 - 4/5) * 0.25 = 0.01, bonus 0.5
        assert!((assessment.value - 0.51_f32).abs() < 0.000_1_f32);
    }

    #[rstest]
    fn the_reason_names_at_most_two_shared_interests() {
        let a = vec![
            interest("music", 5),
            interest("hiking", 4),
            interest("cooking", 3),
        ];
        let b = a.clone();
        let assessment = assess(&a, &b);
        assert_eq!(
            assessment.reason.as_deref(),
            Some("You both enjoy music and hiking")
        );
    }

    #[rstest]
    fn four_strong_shared_interests_saturate_the_factor() {
        let a = vec![
            interest("music", 5),
            interest("hiking", 5),
            interest("cooking", 5),
            interest("film", 5),
        ];
        let b = a.clone();
        let assessment = assess(&a, &b);
        assert!((assessment.value - 1.0_f32).abs() < 0.000_1_f32);
    }

    #[rstest]
    fn adding_a_shared_interest_never_lowers_the_value() {
        let mut a = vec![interest("music", 5), interest("reading", 5)];
        let mut b = vec![interest("music", 5), interest("travel", 5)];
        let before = assess(&a, &b).value;

        a.push(interest("chess", 1));
        b.push(interest("chess", 5));
        let after = assess(&a, &b).value;

        assert!(after >= before - 0.000_1_f32);
    }
}
