//! Bounded integer counter.
//!
//! The atomic unit of Jaipur state: market stock per good, hand entries,
//! herd sizes, scores and the fully-sold tally are all counters with a
//! fixed `[min, max]` range.

use serde::{Deserialize, Serialize};

/// An integer clamped to `[min, max]`.
///
/// Mutators clamp instead of overflowing and report whether the requested
/// change fit. Callers that rely on exact arithmetic (moving cards between
/// counters) check the return value.
///
/// ```
/// use rust_jaipur::components::Counter;
///
/// let mut herd = Counter::new(0, 0, 11);
/// assert!(herd.increment(3));
/// assert!(!herd.increment(10)); // clamped at 11
/// assert_eq!(herd.value(), 11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counter {
    value: i32,
    min: i32,
    max: i32,
}

impl Counter {
    /// Create a counter; `value` is clamped into range.
    #[must_use]
    pub fn new(value: i32, min: i32, max: i32) -> Self {
        assert!(min <= max, "Counter min {} exceeds max {}", min, max);
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    /// A counter starting at 0 with range `[0, max]`.
    #[must_use]
    pub fn up_to(max: i32) -> Self {
        Self::new(0, 0, max)
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Set the value, clamping into range. Returns false if clamped.
    pub fn set_value(&mut self, value: i32) -> bool {
        self.value = value.clamp(self.min, self.max);
        self.value == value
    }

    /// Add `amount` (may be negative). Returns false if the result was clamped.
    pub fn increment(&mut self, amount: i32) -> bool {
        let target = self.value.saturating_add(amount);
        self.set_value(target)
    }

    /// Subtract `amount`. Returns false if the result was clamped.
    pub fn decrement(&mut self, amount: i32) -> bool {
        self.increment(amount.saturating_neg())
    }

    #[must_use]
    pub fn is_min(&self) -> bool {
        self.value == self.min
    }

    #[must_use]
    pub fn is_max(&self) -> bool {
        self.value == self.max
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}..={}]", self.value, self.min, self.max)
    }
}
