//! The profile aggregator.
//!
//! Issues both cache lookups back-to-back and joins them, so wall-clock
//! latency is the slower branch, not the sum. Because each cache absorbs
//! its own failures into a sentinel, one branch failing never suppresses
//! the other branch's data; the combined record is always assembled.

use serde::Serialize;

use lectern_core::directory::{DirectoryProfile, DirectoryResult};
use lectern_core::matcher::select_best;
use lectern_core::ratings::TeacherCandidate;
use lectern_directory::{DirectoryCache, DirectoryFetch};
use lectern_ratings::{RatingsCache, RatingsSearch};
use lectern_storage::KeyValueStore;

/// The combined record for one instructor, assembled fresh on every call.
///
/// Only its two constituents are cached, each under its own key; the
/// combination itself never is.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregatedProfile {
    /// Directory record, when that branch succeeded.
    pub directory_data: Option<DirectoryProfile>,
    /// Whether the directory branch produced a usable record.
    pub directory_success: bool,
    /// Best-matching ratings candidate, when any candidate was found.
    pub best_ratings_match: Option<TeacherCandidate>,
}

/// Orchestrates the two caches for one logical instructor request.
pub struct ProfileAggregator<D, R, S> {
    directory: DirectoryCache<D, S>,
    ratings: RatingsCache<R, S>,
}

impl<D, R, S> ProfileAggregator<D, R, S>
where
    D: DirectoryFetch,
    R: RatingsSearch,
    S: KeyValueStore,
{
    /// Create an aggregator over the two cache components.
    pub fn new(directory: DirectoryCache<D, S>, ratings: RatingsCache<R, S>) -> Self {
        Self { directory, ratings }
    }

    /// Fetch directory data and the best ratings match for one instructor.
    ///
    /// Both branches are issued before either is awaited and both settle
    /// before assembly; the matcher then reduces whatever candidate list
    /// the ratings branch produced against the caller's `name`.
    pub async fn combined_profile(
        &self,
        id: &str,
        name: &str,
        school_id: Option<&str>,
    ) -> AggregatedProfile {
        let (directory, candidates) = tokio::join!(
            self.directory.get_profile(id),
            self.ratings.get_candidates(Some(id), name, school_id),
        );

        let best_ratings_match =
            select_best(candidates.as_deref().unwrap_or_default(), name).cloned();

        tracing::debug!(
            %id,
            directory_success = directory.success,
            matched = best_ratings_match.is_some(),
            "assembled combined profile"
        );

        AggregatedProfile {
            directory_data: directory.data,
            directory_success: directory.success,
            best_ratings_match,
        }
    }

    /// Reduced contract: directory data only, no ratings call, no matcher.
    pub async fn directory_profile(&self, id: &str) -> DirectoryResult {
        self.directory.get_profile(id).await
    }
}
