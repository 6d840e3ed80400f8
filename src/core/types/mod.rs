//! # Core Types Module
//!
//! This module provides the fundamental value types used throughout the
//! reliability-metrics library: whole-second durations and Unix-epoch
//! timestamps.
//!
//! ## Key Types
//!
//! * `Seconds` - A signed duration in whole seconds with convenient conversion methods
//! * `Timestamp` - A point in time expressed as Unix-epoch seconds
//!
//! ## Example
//!
//! ```rust
//! use reliability_metrics::core::types::Seconds;
//!
//! let d = Seconds::new(300);
//! assert_eq!(d.as_minutes(), 5.0);
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a duration in whole seconds
///
/// The value is signed: gap accumulations over ordered interval
/// sequences produce non-positive sums under the engine's subtraction
/// convention, and those sums are reported as-is.
///
/// # Examples
///
/// ```rust
/// use reliability_metrics::core::types::Seconds;
///
/// let d = Seconds::new(5400);
/// assert_eq!(d.as_secs(), 5400);
/// assert_eq!(d.as_minutes(), 90.0);
/// assert_eq!(d.as_hours(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Seconds(pub i64);

impl Seconds {
    /// A zero-length duration
    pub const ZERO: Seconds = Seconds(0);

    /// Creates a new Seconds from the given number of whole seconds
    pub fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// Returns the duration in whole seconds
    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Returns the duration in minutes
    pub fn as_minutes(&self) -> f64 {
        self.0 as f64 / 60.0
    }

    /// Returns the duration in hours
    pub fn as_hours(&self) -> f64 {
        self.as_minutes() / 60.0
    }
}

impl From<Seconds> for i64 {
    fn from(secs: Seconds) -> Self {
        secs.as_secs()
    }
}

impl std::ops::Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Neg for Seconds {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Represents a point in time as Unix-epoch seconds
///
/// All interval arithmetic in this crate happens on whole seconds, so
/// timestamps carry no sub-second precision. Converting from
/// [`SystemTime`] truncates toward the epoch.
///
/// # Examples
///
/// ```rust
/// use reliability_metrics::core::types::Timestamp;
///
/// let start = Timestamp::from_unix(1_618_617_600);
/// let end = Timestamp::from_unix(1_618_617_900);
/// assert_eq!(end.seconds_since(start), 300);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new Timestamp from Unix-epoch seconds
    pub fn from_unix(secs: i64) -> Self {
        Self(secs)
    }

    /// Returns the timestamp as Unix-epoch seconds
    pub fn as_unix(&self) -> i64 {
        self.0
    }

    /// Returns the signed distance from `earlier` to `self` in whole seconds
    ///
    /// Negative when `earlier` is actually later than `self`.
    pub fn seconds_since(&self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => Self(elapsed.as_secs() as i64),
            Err(before_epoch) => Self(-(before_epoch.duration().as_secs() as i64)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_conversions() {
        let d = Seconds::new(5400);

        assert_eq!(d.as_secs(), 5400);
        assert_eq!(d.as_minutes(), 90.0);
        assert_eq!(d.as_hours(), 1.5);
        assert_eq!(i64::from(d), 5400);
    }

    #[test]
    fn test_seconds_arithmetic() {
        let sum = Seconds::new(120) + Seconds::new(180);

        assert_eq!(sum, Seconds::new(300));
        // Gap sums carry the engine's sign convention; negation
        // restores positive magnitudes
        assert_eq!(-Seconds::new(-3615), Seconds::new(3615));
    }

    #[test]
    fn test_timestamp_distance_is_signed() {
        let earlier = Timestamp::from_unix(100);
        let later = Timestamp::from_unix(400);

        assert_eq!(later.seconds_since(earlier), 300);
        assert_eq!(earlier.seconds_since(later), -300);
    }
}
