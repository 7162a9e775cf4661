//! Parallel batch loading of region files
//!
//! Each file is read and parsed on a blocking worker task; results are
//! gathered, sorted back into path order for determinism, and reduced into
//! the registry where duplicate ids surface. Parsing is deterministic on
//! its input, so there is no retry: a failed file would fail again.

use super::discovery::discover_region_files;
use super::report::LoadReport;
use crate::app::models::StrategicRegion;
use crate::app::services::region_loader::{parse_region, validate_region};
use crate::error::{LoadError, Result};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Parallel loader for a strategic regions directory
#[derive(Debug, Clone)]
pub struct BatchLoader {
    parallel_workers: usize,
}

impl BatchLoader {
    /// Create a loader with the given worker count (at least 1)
    pub fn new(parallel_workers: usize) -> Self {
        Self {
            parallel_workers: parallel_workers.max(1),
        }
    }

    /// Load every region file under a directory.
    ///
    /// Per-file errors are collected into the report; only a missing
    /// directory or a failed directory walk aborts the batch.
    pub async fn load_regions(&self, dir: &Path) -> Result<LoadReport> {
        let start = Instant::now();
        let files = discover_region_files(dir)?;

        info!(
            "Loading {} region files from {} with {} workers",
            files.len(),
            dir.display(),
            self.parallel_workers
        );

        let mut outcomes = self.parse_files(&files).await;

        // Worker completion order is nondeterministic; path order makes
        // error reporting and duplicate attribution reproducible
        outcomes.sort_by(|a, b| a.0.cmp(&b.0));

        let mut report = LoadReport::default();
        report.stats.files_discovered = files.len();

        for (path, outcome) in outcomes {
            match outcome {
                Ok(region) => {
                    report.stats.files_loaded += 1;
                    if let Err(err) = report.regions.insert(region, &path) {
                        warn!("{err}");
                        report.errors.push(err);
                    }
                }
                Err(err) => {
                    warn!("{err}");
                    report.stats.files_failed += 1;
                    report.errors.push(err);
                }
            }
        }

        report.stats.regions_loaded = report.regions.len();
        report.stats.periods_loaded = report.regions.total_periods();
        report.stats.elapsed = start.elapsed();

        info!(
            "Batch complete: {} regions, {} periods, {} errors in {:.2}s",
            report.stats.regions_loaded,
            report.stats.periods_loaded,
            report.errors.len(),
            report.stats.elapsed.as_secs_f64()
        );

        Ok(report)
    }

    /// Parse every file on blocking workers, bounded by the worker count
    async fn parse_files(
        &self,
        files: &[PathBuf],
    ) -> Vec<(PathBuf, std::result::Result<StrategicRegion, LoadError>)> {
        stream::iter(files.iter().cloned())
            .map(|path| {
                tokio::task::spawn_blocking(move || {
                    let outcome = load_one_file(&path);
                    (path, outcome)
                })
            })
            .buffer_unordered(self.parallel_workers)
            .map(|joined| match joined {
                Ok(outcome) => outcome,
                Err(join_err) => (
                    PathBuf::new(),
                    Err(LoadError::worker(join_err.to_string())),
                ),
            })
            .collect()
            .await
    }
}

/// Read, parse, and validate one region file
fn load_one_file(path: &Path) -> std::result::Result<StrategicRegion, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let region = parse_region(&text).map_err(|e| LoadError::parse(path, e))?;
    validate_region(&region).map_err(|e| LoadError::validation(path, e))?;
    Ok(region)
}
