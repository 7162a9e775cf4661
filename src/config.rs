//! Configuration management and validation.
//!
//! Provides configuration structures describing where the map data lives
//! on disk and how the batch loader should run, with validation of the
//! combinations that cannot work.

use crate::constants::{ADJACENCY_RULES_FILE, CITIES_FILE, STRATEGIC_REGIONS_DIR};
use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory of the mod (paths below are relative to it)
    pub mod_root: PathBuf,

    /// Locations of the individual data file kinds
    pub paths: DataPaths,

    /// Batch loading performance settings
    pub performance: PerformanceConfig,
}

/// Locations of the data files, relative to the mod root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Directory holding one strategic region file per region
    pub strategic_regions_dir: PathBuf,

    /// The adjacency rules file
    pub adjacency_rules_file: PathBuf,

    /// The city placement file
    pub cities_file: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            strategic_regions_dir: PathBuf::from(STRATEGIC_REGIONS_DIR),
            adjacency_rules_file: PathBuf::from(ADJACENCY_RULES_FILE),
            cities_file: PathBuf::from(CITIES_FILE),
        }
    }
}

/// Batch loading performance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of files parsed concurrently
    pub parallel_workers: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_workers: num_cpus::get(),
        }
    }
}

impl Config {
    /// Create a configuration rooted at a mod directory, with default
    /// file locations and worker count
    pub fn new(mod_root: impl Into<PathBuf>) -> Self {
        Self {
            mod_root: mod_root.into(),
            paths: DataPaths::default(),
            performance: PerformanceConfig::default(),
        }
    }

    /// Absolute path of the strategic regions directory
    pub fn strategic_regions_dir(&self) -> PathBuf {
        self.resolve(&self.paths.strategic_regions_dir)
    }

    /// Absolute path of the adjacency rules file
    pub fn adjacency_rules_file(&self) -> PathBuf {
        self.resolve(&self.paths.adjacency_rules_file)
    }

    /// Absolute path of the cities file
    pub fn cities_file(&self) -> PathBuf {
        self.resolve(&self.paths.cities_file)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.mod_root.join(path)
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.performance.parallel_workers == 0 {
            return Err(LoadError::configuration(
                "parallel_workers must be at least 1",
            ));
        }

        if !self.mod_root.exists() {
            return Err(LoadError::configuration(format!(
                "mod root does not exist: {}",
                self.mod_root.display()
            )));
        }

        debug!(
            "Configuration validated: root {}, {} workers",
            self.mod_root.display(),
            self.performance.parallel_workers
        );
        Ok(())
    }
}
