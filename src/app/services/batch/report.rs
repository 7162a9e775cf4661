//! Batch loading results and statistics

use crate::app::services::region_loader::StrategicRegions;
use crate::error::LoadError;
use std::time::Duration;

/// Statistics of one batch load
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Region files found under the directory
    pub files_discovered: usize,
    /// Files that parsed and validated cleanly
    pub files_loaded: usize,
    /// Files that produced at least one error
    pub files_failed: usize,
    /// Regions registered (excludes duplicates)
    pub regions_loaded: usize,
    /// Weather periods across every registered region
    pub periods_loaded: usize,
    /// Wall-clock time of the whole batch
    pub elapsed: Duration,
}

impl LoadStats {
    /// Fraction of discovered files that loaded cleanly, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.files_discovered == 0 {
            100.0
        } else {
            self.files_loaded as f64 / self.files_discovered as f64 * 100.0
        }
    }
}

/// The outcome of loading one region directory: every region that loaded,
/// every error that occurred, and the batch statistics.
///
/// A batch with errors still carries all its clean regions; callers decide
/// whether partial data is acceptable.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// The regions that loaded, keyed by id
    pub regions: StrategicRegions,
    /// Every error from the batch, in deterministic (path-sorted) order
    pub errors: Vec<LoadError>,
    /// Batch statistics
    pub stats: LoadStats,
}

impl LoadReport {
    /// Whether the whole batch loaded without a single error
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
