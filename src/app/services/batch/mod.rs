//! Batch loading of strategic region directories
//!
//! One region file parses independently of every other, so the batch
//! loader fans file parsing out to blocking worker tasks and only joins at
//! the end for the single cross-file check that exists: region id
//! uniqueness. Errors are collected per file; a malformed file never
//! aborts its siblings.
//!
//! ## Architecture
//!
//! - [`discovery`] - Finding region files under a directory
//! - [`loader`] - Parallel parse orchestration and the duplicate-id reduce
//! - [`report`] - Batch results and statistics

pub mod discovery;
pub mod loader;
pub mod report;


// Re-export main types for easy access
pub use discovery::discover_region_files;
pub use loader::BatchLoader;
pub use report::{LoadReport, LoadStats};
