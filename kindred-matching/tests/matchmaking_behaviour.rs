#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for end-to-end matchmaking runs.

use std::cell::RefCell;

use chrono::{DateTime, TimeZone, Utc};
use kindred_core::test_support::balanced_personality;
use kindred_core::{Interest, ProfileSnapshot};
use kindred_matching::{Candidate, MatchRecord, MatchStatus, Matchmaker, RankedMatch};
use kindred_scorer::CompatibilityScorer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const SUBJECT_ID: u64 = 3;
const STRONG_ID: u64 = 11;
const MODERATE_ID: u64 = 22;
const WEAK_ID: u64 = 33;

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    reference: DateTime<Utc>,
    subject: RefCell<Option<ProfileSnapshot>>,
    pool: RefCell<Vec<Candidate>>,
    ranked: RefCell<Option<Vec<RankedMatch>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        reference: Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid fixture instant"),
        subject: RefCell::new(None),
        pool: RefCell::new(Vec::new()),
        ranked: RefCell::new(None),
    }
}

fn subject_profile(reference: DateTime<Utc>) -> ProfileSnapshot {
    ProfileSnapshot::new()
        .with_age(28)
        .with_location("Nairobi, Kenya")
        .with_last_active(reference)
        .with_personality(balanced_personality())
        .with_interest(Interest::new("music", 4).expect("valid interest"))
}

#[given("a subject profile and a pool of three candidates")]
fn subject_and_pool(context: &TestContext) {
    let subject = subject_profile(context.reference);

    let strong = Candidate {
        id: STRONG_ID,
        snapshot: subject.clone(),
    };
    let moderate = Candidate {
        id: MODERATE_ID,
        snapshot: ProfileSnapshot::new()
            .with_age(31)
            .with_location("Nairobi, Kenya")
            .with_interest(Interest::new("music", 2).expect("valid interest")),
    };
    let weak = Candidate {
        id: WEAK_ID,
        snapshot: ProfileSnapshot::new()
            .with_location("Kampala, Uganda")
            .with_interest(Interest::new("golf", 5).expect("valid interest")),
    };

    *context.subject.borrow_mut() = Some(subject);
    *context.pool.borrow_mut() = vec![weak, moderate, strong];
}

#[when("the matchmaker ranks the pool")]
fn rank_pool(context: &TestContext) {
    let matchmaker = Matchmaker::new(CompatibilityScorer::with_defaults(context.reference));
    let subject = context
        .subject
        .borrow()
        .as_ref()
        .cloned()
        .expect("a subject must be prepared before ranking");
    let pool = context.pool.borrow().clone();
    *context.ranked.borrow_mut() = Some(matchmaker.rank(&subject, pool));
}

#[then("only the candidates above the minimum score remain, best first")]
fn assert_filtered_and_ordered(context: &TestContext) {
    let ranked = borrow_ranked(context);
    let ids: Vec<u64> = ranked.iter().map(|matched| matched.id).collect();
    assert_eq!(ids, vec![STRONG_ID, MODERATE_ID]);
    assert!(
        ranked
            .iter()
            .all(|matched| matched.result.score() >= 60.0),
        "every surviving candidate must clear the minimum score"
    );
}

#[then("pending match records carry the subject, scores, and joined reasons")]
fn assert_pending_records(context: &TestContext) {
    let ranked = borrow_ranked(context);
    let records = MatchRecord::pending_from_ranked(SUBJECT_ID, &ranked);

    assert_eq!(records.len(), ranked.len());
    let strongest = records.first().expect("a strongest record exists");
    assert_eq!(strongest.subject_id, SUBJECT_ID);
    assert_eq!(strongest.candidate_id, STRONG_ID);
    assert_eq!(strongest.status, MatchStatus::Pending);
    assert!(strongest.reason.contains("music"));
}

fn borrow_ranked(context: &TestContext) -> Vec<RankedMatch> {
    context
        .ranked
        .borrow()
        .as_ref()
        .cloned()
        .expect("the pool must be ranked before assertions")
}

#[scenario(path = "tests/features/matchmaking.feature", index = 0)]
fn a_batch_run_keeps_strong_candidates(context: TestContext) {
    let _ = context;
}
