//! Profile aggregation: one logical "everything about this instructor"
//! request fanned out concurrently over the directory and ratings caches.

pub mod aggregator;

pub use aggregator::{AggregatedProfile, ProfileAggregator};
