//! Ratings upstream: GraphQL search client plus the time-bounded cache
//! component that fronts it.
//!
//! Callers go through [`RatingsCache::get_candidates`] and always receive an
//! `Option<Vec<TeacherCandidate>>`. `None` means "no usable answer", never
//! an error.

pub mod cache;
pub mod client;
pub mod messages;
pub mod query;

pub use cache::RatingsCache;
pub use client::{RatingsApiError, RatingsClient, RatingsSearch, DEFAULT_AUTHORIZATION};
pub use query::DEFAULT_SCHOOL_ID;
