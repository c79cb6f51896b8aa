//! Resilience decorators applied to bound capability backends.

mod time_bounded;

pub use time_bounded::TimeBounded;
