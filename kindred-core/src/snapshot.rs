//! Point-in-time profile snapshots consumed by the scorer.

use chrono::{DateTime, Utc};

use crate::{Gender, Interest, PersonalityProfile, Seeking};

/// Read-only view of one user's profile at scoring time.
///
/// Every field other than `interests` is optional: absence is a valid,
/// first-class state that each scoring factor substitutes a documented
/// default for. Callers build a fresh snapshot per scoring call; the
/// scorer never mutates one.
///
/// # Examples
/// ```
/// use kindred_core::{Interest, ProfileSnapshot};
///
/// # fn main() -> Result<(), kindred_core::InterestError> {
/// let snapshot = ProfileSnapshot::new()
///     .with_age(28)
///     .with_location("Nairobi, Kenya")
///     .with_interest(Interest::new("music", 4)?);
/// assert_eq!(snapshot.age, Some(28));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSnapshot {
    /// Age in years, when disclosed.
    pub age: Option<u8>,
    /// Free-text location, conventionally "City, Country".
    pub location: Option<String>,
    /// Stated gender identity.
    pub gender: Option<Gender>,
    /// Stated matching preference.
    pub seeking: Option<Seeking>,
    /// Instant the user was last seen active.
    pub last_active: Option<DateTime<Utc>>,
    /// Most recent personality assessment, if taken.
    pub personality: Option<PersonalityProfile>,
    /// Declared interests; may be empty.
    pub interests: Vec<Interest>,
}

impl ProfileSnapshot {
    /// Construct an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the age while returning `self` for chaining.
    #[must_use]
    pub const fn with_age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the location while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the gender while returning `self` for chaining.
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the seeking preference while returning `self` for chaining.
    #[must_use]
    pub const fn with_seeking(mut self, seeking: Seeking) -> Self {
        self.seeking = Some(seeking);
        self
    }

    /// Set the last-active instant while returning `self` for chaining.
    #[must_use]
    pub const fn with_last_active(mut self, last_active: DateTime<Utc>) -> Self {
        self.last_active = Some(last_active);
        self
    }

    /// Set the personality vector while returning `self` for chaining.
    #[must_use]
    pub const fn with_personality(mut self, personality: PersonalityProfile) -> Self {
        self.personality = Some(personality);
        self
    }

    /// Replace the interest list while returning `self` for chaining.
    #[must_use]
    pub fn with_interests(mut self, interests: Vec<Interest>) -> Self {
        self.interests = interests;
        self
    }

    /// Append one interest while returning `self` for chaining.
    #[must_use]
    pub fn with_interest(mut self, interest: Interest) -> Self {
        self.interests.push(interest);
        self
    }
}
