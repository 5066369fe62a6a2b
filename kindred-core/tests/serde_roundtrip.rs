//! Serde round-trip coverage for the snapshot model.

#![cfg(feature = "serde")]
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use chrono::{TimeZone, Utc};
use kindred_core::{
    CompatibilityResult, Gender, Interest, PersonalityProfile, ProfileSnapshot, Seeking,
};

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = ProfileSnapshot::new()
        .with_age(28)
        .with_location("Nairobi, Kenya")
        .with_gender(Gender::Woman)
        .with_seeking(Seeking::Everyone)
        .with_last_active(
            Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
                .single()
                .expect("valid fixture timestamp"),
        )
        .with_personality(
            PersonalityProfile::new(3.0, 3.0, 3.0, 3.0, 3.0).expect("valid personality"),
        )
        .with_interest(Interest::new("music", 4).expect("valid interest"));

    let encoded = serde_json::to_string(&snapshot).expect("snapshot serialises");
    let decoded: ProfileSnapshot = serde_json::from_str(&encoded).expect("snapshot deserialises");
    assert_eq!(decoded, snapshot);
}

#[test]
fn empty_snapshot_round_trips_through_json() {
    let snapshot = ProfileSnapshot::new();
    let encoded = serde_json::to_string(&snapshot).expect("snapshot serialises");
    let decoded: ProfileSnapshot = serde_json::from_str(&encoded).expect("snapshot deserialises");
    assert_eq!(decoded, snapshot);
}

#[test]
fn result_round_trips_through_json() {
    let result = CompatibilityResult::new(82.5, vec!["You both enjoy music".to_owned()]);
    let encoded = serde_json::to_string(&result).expect("result serialises");
    let decoded: CompatibilityResult = serde_json::from_str(&encoded).expect("result deserialises");
    assert_eq!(decoded, result);
}
