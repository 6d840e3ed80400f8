//! Reliability and maintainability KPIs
//!
//! This module is the metrics engine: a set of pure functions that take
//! one or two [`Component`] values and return a duration in whole
//! seconds. Single-component metrics walk the interval sequences once;
//! the series/parallel composition functions combine the derived MDT
//! and MTBF figures of two components without re-reading their records.
//!
//! Every function is stateless and deterministic. The only guarded
//! condition is division by zero, which uniformly yields
//! `Seconds::ZERO` — degenerate input (no failures, a single failure,
//! records summing to zero) produces a neutral zero rather than an
//! error. Callers therefore cannot distinguish "no data" from a true
//! zero through the return value alone.
//!
//! # Gap sign convention
//!
//! [`mtbf`] and [`uptime`] accumulate gaps as the end of the *earlier*
//! interval minus the start (for [`mtbf`]) or end (for [`uptime`]) of
//! the *later* one. Chronologically ordered, non-overlapping records
//! therefore produce non-positive sums, and the sums are reported
//! as-is. Callers wanting positive gap magnitudes negate the result.
//!
//! # Examples
//!
//! ```rust
//! use reliability_metrics::component::{Component, Failure};
//! use reliability_metrics::core::types::Timestamp;
//! use reliability_metrics::perf;
//!
//! let component = Component::new(
//!     vec![Failure::new(
//!         Timestamp::from_unix(1_618_635_660),
//!         Timestamp::from_unix(1_618_635_960),
//!         "power loss",
//!     )],
//!     Vec::new(),
//! );
//!
//! // A single five-minute outage averages to five minutes of downtime
//! assert_eq!(perf::mdt(&component).unwrap().as_secs(), 300);
//! ```

use tracing::trace;

use crate::component::Component;
use crate::core::types::Seconds;
use crate::error::{Error, Result};

/// Truncating mean over `samples` observations, zero-guarded
///
/// Returns zero when there are no samples or the accumulated total is
/// exactly zero, so degenerate histories never divide by zero.
fn mean(total: i64, samples: i64) -> Seconds {
    if total == 0 || samples == 0 {
        return Seconds::ZERO;
    }

    Seconds::new(total / samples)
}

/// Truncating ratio for the composed KPIs, zero-guarded
fn ratio(top: i64, div: i64) -> Seconds {
    if div == 0 {
        trace!(top, "zero divisor in composed KPI, reporting 0");
        return Seconds::ZERO;
    }

    Seconds::new(top / div)
}

/// Mean Downtime is the average time an asset/system is unavailable.
///
/// Sums the recorded failure durations and divides by the failure
/// count, truncating toward zero. Returns zero when no failures are
/// recorded or when the recorded downtime sums to exactly zero.
///
/// Returns Mean Downtime as seconds.
pub fn mdt(component: &Component) -> Result<Seconds> {
    let downtime: i64 = component.failures.iter().map(|failure| failure.duration().as_secs()).sum();

    Ok(mean(downtime, component.failures.len() as i64))
}

/// Mean Time Between Failures denotes time between failures in a system
/// which can be repaired; it should not be used for systems where
/// repair is not possible.
///
/// Each gap runs from the end of one failure (return to service) to the
/// start of the next (onset of downtime), accumulated as
/// `end_time[i] - start_time[i + 1]`, so ordered records yield
/// non-positive sums (see the module-level sign convention). The sum is
/// divided by the number of gaps, truncating toward zero. Returns zero
/// for components with fewer than two failures, where no gap exists,
/// and when the gaps sum to exactly zero.
///
/// Returns Mean Time Between Failures as seconds.
pub fn mtbf(component: &Component) -> Result<Seconds> {
    let gaps: i64 = component
        .failures
        .windows(2)
        .map(|pair| pair[0].end_time.seconds_since(pair[1].start_time))
        .sum();

    Ok(mean(gaps, component.failures.len().saturating_sub(1) as i64))
}

/// Uptime is a useful metric for determining the availability of a
/// system.
///
/// Accumulates the gap between consecutive availability windows as
/// `start_time[i] - end_time[i + 1]` without averaging, following the
/// module-level sign convention. A component with one or no windows has
/// no gap to accumulate and reports zero.
///
/// Returns Uptime as seconds.
pub fn uptime(component: &Component) -> Result<Seconds> {
    let gaps: i64 = component
        .availability
        .windows(2)
        .map(|pair| pair[0].start_time.seconds_since(pair[1].end_time))
        .sum();

    Ok(Seconds::new(gaps))
}

/// Mean Downtime Serial is the average time for which a system with
/// serial components is unavailable.
///
/// Equivalent to:
///
/// ```text
/// mdt(c1;c2) = (mtbf(c1)·mdt(c2) + mtbf(c2)·mdt(c1)) / (mtbf(c1) + mtbf(c2))
/// ```
///
/// where `c1;c2` is the network in which the components are arranged in
/// series. Combines the components' derived MDT and MTBF figures; a
/// zero divisor reports zero.
///
/// Returns Mean Downtime as seconds.
pub fn mdts(c1: &Component, c2: &Component) -> Result<Seconds> {
    let (mtbf1, mtbf2) = (mtbf(c1)?.as_secs(), mtbf(c2)?.as_secs());
    let (mdt1, mdt2) = (mdt(c1)?.as_secs(), mdt(c2)?.as_secs());

    Ok(ratio(mtbf1 * mdt2 + mtbf2 * mdt1, mtbf1 + mtbf2))
}

/// Mean Downtime Parallel is the average time for which a system with
/// parallel components is unavailable.
///
/// Equivalent to:
///
/// ```text
/// mdt(c1||c2) = mdt(c1)·mdt(c2) / (mdt(c1) + mdt(c2))
/// ```
///
/// where `c1||c2` is the network in which the components are arranged
/// in parallel. A zero divisor reports zero.
///
/// Returns Mean Downtime as seconds.
pub fn mdtp(c1: &Component, c2: &Component) -> Result<Seconds> {
    let (mdt1, mdt2) = (mdt(c1)?.as_secs(), mdt(c2)?.as_secs());

    Ok(ratio(mdt1 * mdt2, mdt1 + mdt2))
}

/// Mean Time Between Failures Series for systems in a network where the
/// components are running in series.
///
/// Equivalent to:
///
/// ```text
/// mtbf(c1;c2) = 1 / (1/mtbf(c1) + 1/mtbf(c2))
///             = mtbf(c1)·mtbf(c2) / (mtbf(c1) + mtbf(c2))
/// ```
///
/// where `c1;c2` is the network in which the components are arranged in
/// series. A zero divisor reports zero.
///
/// Returns Mean Time Between Failures as seconds.
pub fn mtbfs(c1: &Component, c2: &Component) -> Result<Seconds> {
    let (mtbf1, mtbf2) = (mtbf(c1)?.as_secs(), mtbf(c2)?.as_secs());

    Ok(ratio(mtbf1 * mtbf2, mtbf1 + mtbf2))
}

/// Mean Time Between Failures Parallel for systems running in parallel.
///
/// Equivalent to:
///
/// ```text
/// mtbf(c1||c2) = 1 / (1/mtbf(c1) · PF(c2, mdt(c1)) + 1/mtbf(c2) · PF(c1, mdt(c2)))
///              = mtbf(c1)·mtbf(c2) / (mdt(c1) + mdt(c2))
/// ```
///
/// where `c1||c2` is the network in which the components are arranged
/// in parallel, and `PF(c, t)` is the probability of failure of
/// component `c` during the vulnerability window `t`. A zero divisor
/// reports zero.
///
/// Returns Mean Time Between Failures as seconds.
pub fn mtbfp(c1: &Component, c2: &Component) -> Result<Seconds> {
    let (mtbf1, mtbf2) = (mtbf(c1)?.as_secs(), mtbf(c2)?.as_secs());
    let (mdt1, mdt2) = (mdt(c1)?.as_secs(), mdt(c2)?.as_secs());

    Ok(ratio(mtbf1 * mtbf2, mdt1 + mdt2))
}

/// Annualised Failure Rate is the estimated probability of a device or
/// component failing during a full year of operation.
///
/// Not yet computed; calling it returns [`Error::NotImplemented`].
pub fn afr(_component: &Component) -> Result<f64> {
    Err(Error::not_implemented("AFR is not yet computed"))
}

/// Mean Time to Acknowledge describes the responsiveness of maintenance
/// teams, measuring the time from when the maintenance teams are
/// alerted to the existence of a fault to the time the maintenance team
/// acknowledges the fault.
///
/// Not yet computed; calling it returns [`Error::NotImplemented`].
pub fn mtta(_component: &Component) -> Result<Seconds> {
    Err(Error::not_implemented("MTTA is not yet computed"))
}

/// Mean Time to Detection describes the average time for parties to
/// detect and report a failure.
///
/// Not yet computed; calling it returns [`Error::NotImplemented`].
pub fn mttd(_component: &Component) -> Result<Seconds> {
    Err(Error::not_implemented("MTTD is not yet computed"))
}

/// Mean Time to Failure is the average time between non-repairable
/// failures of a system.
///
/// Not yet computed; calling it returns [`Error::NotImplemented`].
pub fn mttf(_component: &Component) -> Result<Seconds> {
    Err(Error::not_implemented("MTTF is not yet computed"))
}

/// Mean Time to Recover assists in determining where the problem lies
/// within the maintenance process for a system and is useful for
/// assessing the speed of the overall recovery process. It covers the
/// period from when the system becomes unavailable to the time it
/// becomes available again.
///
/// Not yet computed; calling it returns [`Error::NotImplemented`].
pub fn mtt_recover(_component: &Component) -> Result<Seconds> {
    Err(Error::not_implemented("MTTRecover is not yet computed"))
}

/// Mean Time to Repair represents the average time it takes to repair a
/// system, including the repair time plus any additional testing time.
/// The timing of this process does not conclude until the system is
/// fully functional.
///
/// Not yet computed; calling it returns [`Error::NotImplemented`].
pub fn mtt_repair(_component: &Component) -> Result<Seconds> {
    Err(Error::not_implemented("MTTRepair is not yet computed"))
}

/// Mean Time to Respond illustrates the average time taken to recover
/// from a failure, starting from the time the team is first alerted to
/// that failure.
///
/// Not yet computed; calling it returns [`Error::NotImplemented`].
pub fn mtt_response(_component: &Component) -> Result<Seconds> {
    Err(Error::not_implemented("MTTResponse is not yet computed"))
}

/// Mean Time to Resolve is the average time taken to resolve a failure
/// in a system entirely, covering the time spent detecting the failure,
/// diagnosis, repairing the fault, and assurance time (the time it
/// takes to ensure the issue won't repeat). It is a key metric for
/// improving customer satisfaction.
///
/// Not yet computed; calling it returns [`Error::NotImplemented`].
pub fn mtt_resolve(_component: &Component) -> Result<Seconds> {
    Err(Error::not_implemented("MTTResolve is not yet computed"))
}
