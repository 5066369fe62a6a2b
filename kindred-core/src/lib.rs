//! Core domain types for the Kindred matching engine.
//!
//! The crate models the data two people bring to a compatibility check —
//! demographics, a Big Five personality vector, and weighted interests —
//! together with the [`Scorer`] trait implemented by the scoring engine.
//! Constructors validate their input and return `Result` to surface
//! invalid profiles early; once constructed, values are valid by
//! construction and scoring over them is total.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod gender;
mod interest;
mod personality;
mod result;
mod scorer;
mod snapshot;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use gender::{Gender, Seeking};
pub use interest::{Interest, InterestError, MAX_INTEREST_LEVEL, MIN_INTEREST_LEVEL};
pub use personality::{PersonalityProfile, PersonalityProfileError, TRAIT_MAX, TRAIT_MIN};
pub use result::{CompatibilityResult, MAX_REASONS, MAX_SCORE};
pub use scorer::Scorer;
pub use snapshot::ProfileSnapshot;
