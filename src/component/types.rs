use crate::core::types::{Seconds, Timestamp};
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A recorded interval of unplanned downtime with a cause label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Failure {
    /// Onset of unplanned downtime
    pub start_time: Timestamp,
    /// Return to service after repair
    pub end_time: Timestamp,
    /// Free-text cause label; never inspected by any computation
    pub cause: String,
}

impl Failure {
    /// Creates a new Failure covering `start_time..end_time`
    pub fn new(start_time: Timestamp, end_time: Timestamp, cause: impl Into<String>) -> Self {
        Self { start_time, end_time, cause: cause.into() }
    }

    /// Length of the outage in whole seconds
    pub fn duration(&self) -> Seconds {
        Seconds::new(self.end_time.seconds_since(self.start_time))
    }
}

/// A recorded window during which a component was in service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Available {
    /// Beginning of availability
    pub start_time: Timestamp,
    /// End of availability
    pub end_time: Timestamp,
}

impl Available {
    /// Creates a new Available window covering `start_time..end_time`
    pub fn new(start_time: Timestamp, end_time: Timestamp) -> Self {
        Self { start_time, end_time }
    }

    /// Length of the window in whole seconds
    pub fn duration(&self) -> Seconds {
        Seconds::new(self.end_time.seconds_since(self.start_time))
    }
}

/// The failure and availability history of a single component
///
/// Both sequences must be supplied in chronological order with
/// `end_time >= start_time` for every interval; the metrics engine
/// never sorts or checks them. Out-of-order input flips the sign of
/// the accumulated gaps in [`perf::mtbf`](crate::perf::mtbf) and
/// [`perf::uptime`](crate::perf::uptime). Callers that want the
/// contract enforced can run [`Component::validate`] first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Component {
    /// Failure records, ordered chronologically by the caller
    pub failures: Vec<Failure>,
    /// Availability windows, ordered chronologically by the caller
    pub availability: Vec<Available>,
}

impl Component {
    /// Creates a new Component from caller-ordered records
    pub fn new(failures: Vec<Failure>, availability: Vec<Available>) -> Self {
        Self { failures, availability }
    }

    /// Checks the interval contract the metrics engine assumes
    ///
    /// Verifies that every interval has `end_time >= start_time` and
    /// that both sequences are ordered chronologically by start time.
    /// Opt-in: nothing in the engine calls this.
    pub fn validate(&self) -> Result<()> {
        for failure in &self.failures {
            if failure.end_time < failure.start_time {
                return Err(Error::invalid_data(format!(
                    "failure at {} ends before it starts",
                    failure.start_time.as_unix()
                )));
            }
        }

        for window in &self.availability {
            if window.end_time < window.start_time {
                return Err(Error::invalid_data(format!(
                    "availability window at {} ends before it starts",
                    window.start_time.as_unix()
                )));
            }
        }

        if self.failures.windows(2).any(|pair| pair[1].start_time < pair[0].start_time) {
            return Err(Error::invalid_data("failures are not in chronological order"));
        }

        if self.availability.windows(2).any(|pair| pair[1].start_time < pair[0].start_time) {
            return Err(Error::invalid_data("availability windows are not in chronological order"));
        }

        Ok(())
    }
}
