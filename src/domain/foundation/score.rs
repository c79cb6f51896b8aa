//! Bounded numeric value objects carried by capability outcomes.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A score in the closed interval [0, 1].
///
/// Construction clamps out-of-range input; NaN becomes 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UnitScore(f64);

impl UnitScore {
    pub const ZERO: Self = Self(0.0);

    /// Creates a score, clamping to [0, 1].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order over scores. Values are never NaN, so this is exact.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for UnitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// A non-negative number of hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Hours(f64);

impl Hours {
    pub const ZERO: Self = Self(0.0);

    /// Creates an hour count, clamping negatives and NaN to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value < 0.0 {
            return Self::ZERO;
        }
        Self(value)
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}
