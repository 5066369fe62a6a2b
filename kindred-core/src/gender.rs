//! Gender identities and seeking preferences.
//!
//! Both enums round-trip the strings used by profile records, and
//! [`Seeking::accepts`] encodes the preference check applied in both
//! directions by the demographic scorer.
//!
//! # Examples
//! ```
//! use kindred_core::{Gender, Seeking};
//!
//! assert!(Seeking::Women.accepts(Gender::Woman));
//! assert!(!Seeking::Women.accepts(Gender::Man));
//! assert!(Seeking::Everyone.accepts(Gender::NonBinary));
//! ```

/// A user's stated gender identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    /// Identifies as a man.
    Man,
    /// Identifies as a woman.
    Woman,
    /// Identifies outside the binary.
    NonBinary,
}

impl Gender {
    /// Return the gender as the profile-record string.
    ///
    /// # Examples
    /// ```
    /// use kindred_core::Gender;
    ///
    /// assert_eq!(Gender::NonBinary.as_str(), "Non-binary");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Man => "Man",
            Self::Woman => "Woman",
            Self::NonBinary => "Non-binary",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "man" => Ok(Self::Man),
            "woman" => Ok(Self::Woman),
            "non-binary" | "nonbinary" => Ok(Self::NonBinary),
            _ => Err(format!("unknown gender '{s}'")),
        }
    }
}

/// Which genders a user wants to be matched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seeking {
    /// Seeking men.
    Men,
    /// Seeking women.
    Women,
    /// Open to all genders.
    Everyone,
}

impl Seeking {
    /// Return the preference as the profile-record string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Everyone => "Everyone",
        }
    }

    /// Report whether this preference admits the given gender.
    #[must_use]
    pub const fn accepts(self, gender: Gender) -> bool {
        match self {
            Self::Everyone => true,
            Self::Men => matches!(gender, Gender::Man),
            Self::Women => matches!(gender, Gender::Woman),
        }
    }
}

impl std::fmt::Display for Seeking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Seeking {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "everyone" => Ok(Self::Everyone),
            _ => Err(format!("unknown seeking preference '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "tests should fail fast when setup breaks")]

    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Gender::Man)]
    #[case(Gender::Woman)]
    #[case(Gender::NonBinary)]
    fn gender_display_round_trips(#[case] gender: Gender) {
        assert_eq!(Gender::from_str(&gender.to_string()), Ok(gender));
    }

    #[rstest]
    #[case(Seeking::Men)]
    #[case(Seeking::Women)]
    #[case(Seeking::Everyone)]
    fn seeking_display_round_trips(#[case] seeking: Seeking) {
        assert_eq!(Seeking::from_str(&seeking.to_string()), Ok(seeking));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Gender::from_str("unknown").expect_err("unknown gender should not parse");
        assert!(err.contains("unknown gender"));
    }

    #[rstest]
    #[case(Seeking::Men, Gender::Man, true)]
    #[case(Seeking::Men, Gender::Woman, false)]
    #[case(Seeking::Men, Gender::NonBinary, false)]
    #[case(Seeking::Women, Gender::Woman, true)]
    #[case(Seeking::Women, Gender::Man, false)]
    #[case(Seeking::Everyone, Gender::Man, true)]
    #[case(Seeking::Everyone, Gender::NonBinary, true)]
    fn accepts_encodes_the_preference_table(
        #[case] seeking: Seeking,
        #[case] gender: Gender,
        #[case] expected: bool,
    ) {
        assert_eq!(seeking.accepts(gender), expected);
    }
}
