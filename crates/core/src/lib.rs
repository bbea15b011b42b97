//! Pure domain logic for the lectern instructor-profile service.
//!
//! This crate has zero internal dependencies and performs no I/O, so it can
//! be used by the cache components, the aggregator, and any future CLI or
//! worker tooling alike.

pub mod cache;
pub mod directory;
pub mod matcher;
pub mod naming;
pub mod ratings;
