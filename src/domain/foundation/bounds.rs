//! Caller-side bounds for result-set sizes.

use std::fmt;

use super::ValidationError;

/// Number of similar tickets requested, in [1, 20].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TopK(u8);

impl TopK {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;
    pub const DEFAULT: Self = Self(5);

    /// Creates a TopK, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "top_k",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    pub fn get(&self) -> usize {
        usize::from(self.0)
    }
}

impl Default for TopK {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum number of conversation turns returned, in [1, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HistoryLimit(u8);

impl HistoryLimit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: Self = Self(10);

    /// Creates a HistoryLimit, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "limit",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    pub fn get(&self) -> usize {
        usize::from(self.0)
    }
}

impl Default for HistoryLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for HistoryLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_k_accepts_bounds() {
        assert_eq!(TopK::try_new(1).unwrap().get(), 1);
        assert_eq!(TopK::try_new(20).unwrap().get(), 20);
        assert_eq!(TopK::default().get(), 5);
    }

    #[test]
    fn top_k_rejects_outside_bounds() {
        assert!(TopK::try_new(0).is_err());
        assert!(TopK::try_new(21).is_err());
        assert!(TopK::try_new(-3).is_err());

        let err = TopK::try_new(21).unwrap_err();
        assert_eq!(err.field(), "top_k");
    }

    #[test]
    fn history_limit_accepts_bounds() {
        assert_eq!(HistoryLimit::try_new(1).unwrap().get(), 1);
        assert_eq!(HistoryLimit::try_new(100).unwrap().get(), 100);
        assert_eq!(HistoryLimit::default().get(), 10);
    }

    #[test]
    fn history_limit_rejects_outside_bounds() {
        assert!(HistoryLimit::try_new(0).is_err());
        assert!(HistoryLimit::try_new(101).is_err());
        assert_eq!(HistoryLimit::try_new(500).unwrap_err().field(), "limit");
    }
}
