//! Component data model
//!
//! This module defines the interval records the metrics engine
//! consumes: [`Failure`] (an unplanned downtime interval with a cause
//! label), [`Available`] (an in-service window), and [`Component`] (the
//! recorded history of a single component, holding both sequences).
//!
//! Components are pure values. The caller constructs them wholesale
//! from whatever feeds its failure and availability records, passes
//! them to the functions in [`crate::perf`], and discards them; nothing
//! in this crate mutates or retains one.
//!
//! # Ordering contract
//!
//! Both sequences must already be sorted chronologically and every
//! interval must satisfy `end_time >= start_time`. The engine pairs
//! consecutive entries without sorting or checking, so out-of-order
//! input silently changes gap signs. [`Component::validate`] checks the
//! contract for callers that want it enforced up front.
//!
//! # Examples
//!
//! ```rust
//! use reliability_metrics::component::{Component, Failure};
//! use reliability_metrics::core::types::Timestamp;
//!
//! let component = Component::new(
//!     vec![Failure::new(
//!         Timestamp::from_unix(1_618_639_260),
//!         Timestamp::from_unix(1_618_639_860),
//!         "power loss",
//!     )],
//!     Vec::new(),
//! );
//! assert!(component.validate().is_ok());
//! ```

/// Component data types
pub mod types;

pub use types::*;

#[cfg(test)]
mod tests;
