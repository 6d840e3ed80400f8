//! Reliability Metrics - a Rust library for reliability and maintainability KPIs
//!
//! This crate computes deterministic reliability KPIs (mean downtime,
//! mean time between failures, uptime statistics) for components
//! described by timestamped failure and availability intervals, and
//! composes those figures across two-component series or parallel
//! reliability networks.
//!
//! # Features
//!
//! - **Component records**: failure and availability intervals as plain values
//! - **Single-component KPIs**: MDT, MTBF, and uptime over recorded intervals
//! - **Network composition**: series and parallel MDT/MTBF for two components
//! - **Explicit placeholders**: metrics that are documented but not yet
//!   computed (AFR, MTTA, MTTD, MTTF, and the MTT-recover/repair/
//!   response/resolve family) fail with [`Error::NotImplemented`]
//!   instead of reporting a misleading zero
//!
//! All durations are whole seconds and all division is integer division
//! truncating toward zero, so results are exactly reproducible.
//!
//! # Examples
//!
//! ```rust
//! use reliability_metrics::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let pump = Component::new(
//!         vec![
//!             Failure::new(
//!                 Timestamp::from_unix(1_618_639_260),
//!                 Timestamp::from_unix(1_618_639_860),
//!                 "seal leak",
//!             ),
//!             Failure::new(
//!                 Timestamp::from_unix(1_618_642_800),
//!                 Timestamp::from_unix(1_618_642_860),
//!                 "sensor fault",
//!             ),
//!         ],
//!         Vec::new(),
//!     );
//!
//!     let downtime = perf::mdt(&pump)?;
//!     println!("mean downtime: {}s", downtime.as_secs());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Input contract
//!
//! The engine never sorts or validates its input: interval sequences
//! must arrive chronologically ordered with `end_time >= start_time`
//! for every record, and out-of-order input silently flips the sign of
//! the accumulated gaps. [`component::Component::validate`] checks the
//! contract for callers that want it enforced.
//!
//! # Error Handling
//!
//! The implemented metrics always succeed; degenerate input (no
//! failures, a single failure, zero-duration records) reports a neutral
//! zero rather than an error. [`Error`] is only returned by the
//! not-yet-computed placeholder metrics and by the opt-in input
//! validation:
//!
//! ```rust
//! use reliability_metrics::{component::Component, perf, Error};
//!
//! let component = Component::default();
//! assert!(matches!(perf::mtta(&component), Err(Error::NotImplemented(_))));
//! ```
//!
//! # Thread Safety
//!
//! Every function is pure and reentrant: components are read-only
//! inputs, nothing is cached or shared, and any number of calls may run
//! concurrently over the same values without coordination.

// Public modules
pub mod component;
pub mod core;
pub mod perf;

// Private modules
mod error;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::component::{Available, Component, Failure};
    pub use crate::core::types::{Seconds, Timestamp};
    pub use crate::perf;
    pub use crate::Error;
    pub use crate::Result;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_covers_the_public_surface() -> Result<()> {
        let component = Component::new(
            vec![Failure::new(Timestamp::from_unix(0), Timestamp::from_unix(60), "Glitch")],
            vec![Available::new(Timestamp::from_unix(60), Timestamp::from_unix(120))],
        );

        assert_eq!(perf::mdt(&component)?, Seconds::new(60));
        assert_eq!(perf::uptime(&component)?, Seconds::ZERO);
        Ok(())
    }
}
