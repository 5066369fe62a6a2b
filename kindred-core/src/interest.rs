//! Self-reported interests with an enthusiasm level.

use thiserror::Error;

/// Lowest admissible interest level.
pub const MIN_INTEREST_LEVEL: u8 = 1;
/// Highest admissible interest level.
pub const MAX_INTEREST_LEVEL: u8 = 5;

/// A named topic a user cares about, with enthusiasm from
/// `MIN_INTEREST_LEVEL` to `MAX_INTEREST_LEVEL`.
///
/// Names are free text; uniqueness per user is expected but not enforced
/// here.
///
/// # Examples
/// ```
/// use kindred_core::Interest;
///
/// # fn main() -> Result<(), kindred_core::InterestError> {
/// let interest = Interest::new("music", 4)?;
/// assert_eq!(interest.name(), "music");
/// assert_eq!(interest.level(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interest {
    name: String,
    level: u8,
}

/// Errors returned by [`Interest::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterestError {
    /// The interest name was empty or whitespace.
    #[error("interest name must not be empty")]
    EmptyName,
    /// The level fell outside the admissible range.
    #[error(
        "interest level must be between {MIN_INTEREST_LEVEL} and {MAX_INTEREST_LEVEL}, got {level}"
    )]
    LevelOutOfRange {
        /// Value that failed validation.
        level: u8,
    },
}

impl Interest {
    /// Validate and construct an interest.
    ///
    /// # Errors
    /// Returns [`InterestError::EmptyName`] for blank names and
    /// [`InterestError::LevelOutOfRange`] for levels outside
    /// `MIN_INTEREST_LEVEL..=MAX_INTEREST_LEVEL`.
    pub fn new(name: impl Into<String>, level: u8) -> Result<Self, InterestError> {
        let owned = name.into();
        if owned.trim().is_empty() {
            return Err(InterestError::EmptyName);
        }
        if !(MIN_INTEREST_LEVEL..=MAX_INTEREST_LEVEL).contains(&level) {
            return Err(InterestError::LevelOutOfRange { level });
        }
        Ok(Self { name: owned, level })
    }

    /// Topic name as declared by the user.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enthusiasm level in `MIN_INTEREST_LEVEL..=MAX_INTEREST_LEVEL`.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(MIN_INTEREST_LEVEL)]
    #[case(MAX_INTEREST_LEVEL)]
    fn accepts_boundary_levels(#[case] level: u8) {
        assert!(Interest::new("hiking", level).is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn rejects_out_of_range_levels(#[case] level: u8) {
        assert!(matches!(
            Interest::new("hiking", level),
            Err(InterestError::LevelOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_names(#[case] name: &str) {
        assert!(matches!(
            Interest::new(name, 3),
            Err(InterestError::EmptyName)
        ));
    }
}
