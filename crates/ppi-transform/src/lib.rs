//! Event log normalization.
//!
//! This crate turns raw event logs into the canonical explicit-interval form:
//!
//! - **classify**: log shape detection from the column mapping
//! - **columns**: column selection, renaming, and type coercion
//! - **datetime**: timestamp parsing into UTC instants
//! - **split**: atomic and production-style rows into START/COMPLETE events
//! - **matcher**: LIFO start/complete matching per case and activity
//! - **ids**: activity-instance identifier generators
//! - **canonical**: canonical table assembly and explicit-log checks
//! - **frame**: the immutable [`EventLog`]
//! - **export**: CSV output of a canonical log

pub mod canonical;
pub mod classify;
pub mod columns;
pub mod data_utils;
pub mod datetime;
pub mod error;
pub mod export;
pub mod formatter;
pub mod frame;
pub mod ids;
pub mod matcher;
pub mod split;

pub use classify::classify_log;
pub use error::{Result, TransformError};
pub use export::{write_event_log, write_event_log_csv};
pub use formatter::{format_event_log, format_event_log_with};
pub use frame::{CanonicalEvent, EventLog};
pub use ids::{InstanceIdGenerator, SequentialIds, UuidIds};
pub use matcher::{InstanceAssignment, MatchedInstances, Stamped, match_activity, match_instances};
