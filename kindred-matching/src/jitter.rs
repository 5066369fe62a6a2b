//! Seeded ranking jitter.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::MatchingError;

/// Deterministic, seeded score offsets that keep a feed from always
/// surfacing the same candidates first.
///
/// Offsets perturb the ranking order only; stored scores are never
/// modified, so the scorer's output stays reproducible. The same seed and
/// candidate count always produce the same offsets — callers rotate the
/// seed (per user, per day, or per request) to vary the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversityJitter {
    seed: u64,
    amplitude: f32,
}

impl DiversityJitter {
    /// Default offset amplitude in score points.
    pub const DEFAULT_AMPLITUDE: f32 = 5.0;

    /// Construct a jitter policy from a seed with the default amplitude.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            amplitude: Self::DEFAULT_AMPLITUDE,
        }
    }

    /// Construct a jitter policy with a custom amplitude.
    ///
    /// # Errors
    /// Returns [`MatchingError::InvalidJitterAmplitude`] when the amplitude
    /// is not finite or is negative.
    pub fn with_amplitude(seed: u64, amplitude: f32) -> Result<Self, MatchingError> {
        if !amplitude.is_finite() || amplitude < 0.0 {
            return Err(MatchingError::InvalidJitterAmplitude { value: amplitude });
        }
        Ok(Self { seed, amplitude })
    }

    /// Generate one offset per candidate, in `0.0..amplitude`.
    #[must_use]
    pub fn offsets(&self, count: usize) -> Vec<f32> {
        if self.amplitude == 0.0 {
            return vec![0.0; count];
        }
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        (0..count)
            .map(|_| rng.gen_range(0.0..self.amplitude))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests should fail fast when setup breaks"
    )]

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn the_same_seed_reproduces_the_offsets() {
        let jitter = DiversityJitter::new(42);
        assert_eq!(jitter.offsets(8), jitter.offsets(8));
    }

    #[rstest]
    fn different_seeds_diverge() {
        let first = DiversityJitter::new(1).offsets(8);
        let second = DiversityJitter::new(2).offsets(8);
        assert_ne!(first, second);
    }

    #[rstest]
    fn offsets_stay_inside_the_amplitude() {
        let jitter = DiversityJitter::with_amplitude(7, 2.5).expect("valid amplitude");
        assert!(
            jitter
                .offsets(64)
                .iter()
                .all(|offset| (0.0..2.5).contains(offset))
        );
    }

    #[rstest]
    fn a_zero_amplitude_is_inert() {
        let jitter = DiversityJitter::with_amplitude(7, 0.0).expect("zero amplitude is valid");
        assert!(jitter.offsets(4).iter().all(|offset| *offset == 0.0));
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    #[case(-1.0)]
    fn unusable_amplitudes_are_rejected(#[case] amplitude: f32) {
        assert!(matches!(
            DiversityJitter::with_amplitude(7, amplitude),
            Err(MatchingError::InvalidJitterAmplitude { .. })
        ));
    }
}
