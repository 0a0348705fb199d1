//! Multi-root resource resolution.
//!
//! This module locates the one file that takes effect for a logical resource
//! name when the application, enabled modules, the system tree, and external
//! packages may all define it, and memoizes the answer per category.

pub mod cache;
pub mod search;

pub use cache::ResolutionCache;
pub use search::SearchIndex;
