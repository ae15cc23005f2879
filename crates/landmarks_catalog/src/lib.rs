//! Landmark Catalog
//!
//! # Philosophy: Validate Once, at the Door
//!
//! A [`Landmark`] is built fully formed and never mutated afterwards. The
//! [`Catalog`] checks it exactly once, when it is offered:
//!
//! 1. **Validation**: latitude, longitude, importance, then year
//! 2. **Admission**: valid records are appended in arrival order
//! 3. **Rejection**: invalid records are dropped and a message lands in the error log
//!
//! Nothing in this crate panics on bad data. Failures are booleans plus an
//! error-log entry that can be inspected after the fact.
//!
//! # Modules
//!
//! - [`record`]: the landmark value type and its validation predicate
//! - [`catalog`]: the owning aggregate (add, filter, export)
//! - [`stats`]: statistics derived from the accepted records
//! - [`shared`]: a lock-guarded catalog for concurrent hosts
//! - [`export`] / [`dataset`]: JSON snapshot out, landmark files in
//! - [`report`]: human-readable summary
//! - [`geo`]: haversine distance and radius search

pub mod catalog;
pub mod clock;
pub mod dataset;
pub mod error;
pub mod export;
pub mod geo;
pub mod record;
pub mod report;
pub mod shared;
pub mod stats;

pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DatasetError, ExportError, ValidationFailure};
pub use export::ExportSnapshot;
pub use geo::{distance_km, find_nearest, NearbyLandmark};
pub use record::Landmark;
pub use shared::SharedCatalog;
pub use stats::{Statistics, StatisticsSummary};
