//! Campus-directory upstream: HTTP client plus the time-bounded cache
//! component that fronts it.
//!
//! The cache is the public face of this crate: callers go through
//! [`DirectoryCache::get_profile`] and always receive a
//! [`DirectoryResult`](lectern_core::directory::DirectoryResult), never an
//! error.

pub mod cache;
pub mod client;

pub use cache::DirectoryCache;
pub use client::{DirectoryApiError, DirectoryClient, DirectoryFetch};
