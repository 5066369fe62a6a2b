//! Big Five personality vectors.
//!
//! A [`PersonalityProfile`] holds the five trait scores produced by a
//! personality assessment. Each trait lives in `TRAIT_MIN..=TRAIT_MAX`;
//! the constructor rejects anything else, naming the offending trait, so
//! downstream scoring never sees an out-of-range vector.

use thiserror::Error;

/// Lowest admissible trait score.
pub const TRAIT_MIN: f32 = 1.0;
/// Highest admissible trait score.
pub const TRAIT_MAX: f32 = 5.0;

/// Five-trait personality vector with every score in `TRAIT_MIN..=TRAIT_MAX`.
///
/// # Examples
/// ```
/// use kindred_core::PersonalityProfile;
///
/// # fn main() -> Result<(), kindred_core::PersonalityProfileError> {
/// let profile = PersonalityProfile::new(3.2, 4.0, 3.5, 2.1, 4.4)?;
/// assert_eq!(profile.openness(), 4.4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalityProfile {
    extraversion: f32,
    agreeableness: f32,
    conscientiousness: f32,
    neuroticism: f32,
    openness: f32,
}

/// Errors returned by [`PersonalityProfile::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum PersonalityProfileError {
    /// A trait score was non-finite or outside `TRAIT_MIN..=TRAIT_MAX`.
    #[error("trait {name} must be a finite value between {TRAIT_MIN} and {TRAIT_MAX}, got {value}")]
    TraitOutOfRange {
        /// Name of the offending trait.
        name: &'static str,
        /// Value that failed validation.
        value: f32,
    },
}

impl PersonalityProfile {
    /// Validate and construct a profile from the five trait scores.
    ///
    /// # Errors
    /// Returns [`PersonalityProfileError::TraitOutOfRange`] naming the first
    /// trait that is non-finite or outside `TRAIT_MIN..=TRAIT_MAX`.
    pub fn new(
        extraversion: f32,
        agreeableness: f32,
        conscientiousness: f32,
        neuroticism: f32,
        openness: f32,
    ) -> Result<Self, PersonalityProfileError> {
        Ok(Self {
            extraversion: validated("extraversion", extraversion)?,
            agreeableness: validated("agreeableness", agreeableness)?,
            conscientiousness: validated("conscientiousness", conscientiousness)?,
            neuroticism: validated("neuroticism", neuroticism)?,
            openness: validated("openness", openness)?,
        })
    }

    /// Sociability and outgoingness.
    #[must_use]
    pub const fn extraversion(self) -> f32 {
        self.extraversion
    }

    /// Warmth and cooperativeness.
    #[must_use]
    pub const fn agreeableness(self) -> f32 {
        self.agreeableness
    }

    /// Organisation and goal orientation.
    #[must_use]
    pub const fn conscientiousness(self) -> f32 {
        self.conscientiousness
    }

    /// Emotional volatility; lower is calmer.
    #[must_use]
    pub const fn neuroticism(self) -> f32 {
        self.neuroticism
    }

    /// Curiosity and appetite for novelty.
    #[must_use]
    pub const fn openness(self) -> f32 {
        self.openness
    }
}

fn validated(name: &'static str, value: f32) -> Result<f32, PersonalityProfileError> {
    if value.is_finite() && (TRAIT_MIN..=TRAIT_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(PersonalityProfileError::TraitOutOfRange { name, value })
    }
}
