//! Caller-side matchmaking policy around the compatibility scorer.
//!
//! The scorer stays pure and deterministic; everything a discovery feed or
//! batch job layers on top of it lives here instead: ranking with a
//! minimum-score filter, seeded diversity jitter applied to the ranking
//! key only, bounded caching of scored pairs, match lifecycle records,
//! and prose explanations derived from factor breakdowns.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use kindred_core::{Interest, ProfileSnapshot};
//! use kindred_matching::{Candidate, Matchmaker};
//! use kindred_scorer::CompatibilityScorer;
//!
//! # fn main() -> Result<(), kindred_core::InterestError> {
//! let reference = Utc
//!     .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
//!     .single()
//!     .expect("valid instant");
//! let matchmaker = Matchmaker::new(CompatibilityScorer::with_defaults(reference));
//!
//! let subject = ProfileSnapshot::new()
//!     .with_location("Nairobi, Kenya")
//!     .with_interest(Interest::new("music", 4)?);
//! let candidates = vec![Candidate {
//!     id: 7,
//!     snapshot: subject.clone(),
//! }];
//!
//! let ranked = matchmaker.rank(&subject, candidates);
//! assert_eq!(ranked.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cache;
mod error;
mod explanation;
mod jitter;
mod rank;
mod record;
mod status;

pub use cache::ScoreCache;
pub use error::MatchingError;
pub use explanation::explain;
pub use jitter::DiversityJitter;
pub use rank::{Candidate, MatchmakingConfig, Matchmaker, RankedMatch};
pub use record::MatchRecord;
pub use status::{MatchStatus, SwipeAction};
