//! Indicator implementations, grouped by dimension and granularity.
//!
//! Each dimension module exposes typed functions per granularity and a
//! `register` function that adds its entries to the registry.

pub mod cost;
pub mod flexibility;
pub mod general;
pub mod quality;
pub mod time;
