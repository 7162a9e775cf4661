//! Command-line argument definitions for the map data loader
//!
//! The complete CLI interface using the clap derive API.

use crate::config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the map data loader
///
/// Loads the declarative data files of a strategy-game map mod (strategic
/// region weather tables, adjacency rules, city placement groups) and
/// reports what parsed, what failed, and why.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mapmod-loader",
    version,
    about = "Load and validate strategy-game map mod data files",
    long_about = "Parses a map mod's strategic region weather files, adjacency rules and \
                  city placement configuration into validated structures, collecting every \
                  parse and validation error in the batch instead of stopping at the first."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load every data file and print a summary report
    Load(LoadArgs),
    /// Load every data file and fail with a non-zero exit code on any error
    Validate(ValidateArgs),
}

/// Arguments shared by the load and validate commands
#[derive(Debug, Clone, Parser)]
pub struct LoadArgs {
    /// Root directory of the mod
    ///
    /// Data files are found at their conventional locations below it
    /// (map/strategic_regions/, map/adjacency_rules.txt, map/cities.txt)
    /// unless overridden.
    #[arg(value_name = "MOD_ROOT")]
    pub mod_root: PathBuf,

    /// Override the strategic regions directory
    #[arg(long = "regions-dir", value_name = "PATH")]
    pub regions_dir: Option<PathBuf>,

    /// Override the adjacency rules file
    #[arg(long = "adjacency-file", value_name = "PATH")]
    pub adjacency_file: Option<PathBuf>,

    /// Override the cities file
    #[arg(long = "cities-file", value_name = "PATH")]
    pub cities_file: Option<PathBuf>,

    /// Number of files parsed concurrently (defaults to the CPU count)
    #[arg(short = 'w', long = "workers", value_name = "N")]
    pub workers: Option<usize>,

    /// Skip the adjacency rules file even if present
    #[arg(long = "skip-adjacency")]
    pub skip_adjacency: bool,

    /// Skip the cities file even if present
    #[arg(long = "skip-cities")]
    pub skip_cities: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Suppress progress bars and non-essential output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl LoadArgs {
    /// Build the loader configuration from the arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::new(&self.mod_root);
        if let Some(dir) = &self.regions_dir {
            config.paths.strategic_regions_dir = dir.clone();
        }
        if let Some(file) = &self.adjacency_file {
            config.paths.adjacency_rules_file = file.clone();
        }
        if let Some(file) = &self.cities_file {
            config.paths.cities_file = file.clone();
        }
        if let Some(workers) = self.workers {
            config.performance.parallel_workers = workers;
        }
        config
    }

    /// Whether progress bars should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Report format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format for validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored report
    Human,
    /// Machine-readable JSON report
    Json,
}
