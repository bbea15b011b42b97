//! HTTP request handlers.

pub mod instructors;
