//! # pof-core
//!
//! The address resolution pipeline and everything it needs:
//! a coordinate cache, a rate limiter, the geocoding port and
//! the report aggregation of the per-record outcomes.

pub mod cache;
pub mod gateways;
pub mod progress;
pub mod rate_limit;
pub mod report;
pub mod usecases;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub mod entities {
    pub use pof_entities::{address::*, geo::*, outcome::*};
}
