//! Bounded cache for scored pairs.

use std::collections::{HashMap, VecDeque};

use kindred_core::CompatibilityResult;

use crate::MatchingError;

/// Unordered user-id pair key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PairKey(u64, u64);

impl PairKey {
    const fn normalised(a: u64, b: u64) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

/// Explicit bounded map from user pairs to their latest scored result.
///
/// Replaces a process-wide memo with a value the calling layer owns.
/// Insertion evicts the oldest pair once the capacity is reached, so the
/// cache never grows past its bound. Keys are unordered: `(a, b)` and
/// `(b, a)` address the same slot.
///
/// # Examples
/// ```
/// use kindred_core::CompatibilityResult;
/// use kindred_matching::ScoreCache;
///
/// # fn main() -> Result<(), kindred_matching::MatchingError> {
/// let mut cache = ScoreCache::new(20)?;
/// cache.insert(1, 2, CompatibilityResult::new(72.0, Vec::new()));
/// assert!(cache.get(2, 1).is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScoreCache {
    capacity: usize,
    entries: HashMap<PairKey, CompatibilityResult>,
    order: VecDeque<PairKey>,
}

impl ScoreCache {
    /// Construct a cache bounded to `capacity` pairs.
    ///
    /// # Errors
    /// Returns [`MatchingError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, MatchingError> {
        if capacity == 0 {
            return Err(MatchingError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        })
    }

    /// Look up the cached result for a pair, in either id order.
    #[must_use]
    pub fn get(&self, a: u64, b: u64) -> Option<&CompatibilityResult> {
        self.entries.get(&PairKey::normalised(a, b))
    }

    /// Cache the result for a pair, evicting the oldest pair when full.
    ///
    /// Re-inserting an existing pair replaces its result without touching
    /// the eviction order.
    pub fn insert(&mut self, a: u64, b: u64, result: CompatibilityResult) {
        let key = PairKey::normalised(a, b);
        if self.entries.insert(key, result).is_some() {
            return;
        }
        self.order.push_back(key);
        if self.order.len() > self.capacity
            && let Some(oldest) = self.order.pop_front()
        {
            self.entries.remove(&oldest);
        }
    }

    /// Number of cached pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the cache holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured bound.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
