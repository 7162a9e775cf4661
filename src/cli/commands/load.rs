//! Load command: parse every data file and print a summary report

use super::shared::{create_spinner, setup_logging};
use crate::app::models::CityGroups;
use crate::app::services::adjacency_loader::AdjacencyRules;
use crate::app::services::batch::{BatchLoader, LoadReport};
use crate::app::services::city_loader::load_city_groups;
use crate::cli::args::LoadArgs;
use crate::error::{LoadError, Result};
use colored::Colorize;
use tracing::{info, warn};

/// Everything one invocation loaded, plus the errors from the optional
/// single-file loads
#[derive(Debug)]
pub struct LoadOutcome {
    /// Batch result for the strategic regions directory
    pub report: LoadReport,
    /// Adjacency rules, when the file existed and loaded
    pub adjacency: Option<AdjacencyRules>,
    /// City groups, when the file existed and loaded
    pub cities: Option<CityGroups>,
    /// Errors from the adjacency and cities loads
    pub extra_errors: Vec<LoadError>,
}

impl LoadOutcome {
    /// Total error count across every file kind
    pub fn total_errors(&self) -> usize {
        self.report.errors.len() + self.extra_errors.len()
    }
}

/// Run the load command. Returns the total error count; data errors are
/// reported, not fatal.
pub async fn run_load(args: LoadArgs) -> Result<usize> {
    setup_logging(&args)?;
    let outcome = execute(&args).await?;
    print_human_report(&outcome);
    Ok(outcome.total_errors())
}

/// Load everything the configuration points at.
///
/// The adjacency and cities files are optional on disk: a mod without
/// canals or cities is fine, and absence is logged rather than reported
/// as an error. A file that exists but fails to load is an error.
pub async fn execute(args: &LoadArgs) -> Result<LoadOutcome> {
    let config = args.to_config();
    config.validate()?;

    let spinner = args.show_progress().then(|| {
        create_spinner(&format!(
            "Loading map data from {}...",
            config.mod_root.display()
        ))
    });

    let loader = BatchLoader::new(config.performance.parallel_workers);
    let report = loader
        .load_regions(&config.strategic_regions_dir())
        .await?;

    let mut extra_errors = Vec::new();

    let adjacency_path = config.adjacency_rules_file();
    let adjacency = if args.skip_adjacency {
        None
    } else if adjacency_path.is_file() {
        match AdjacencyRules::from_file(&adjacency_path) {
            Ok(rules) => Some(rules),
            Err(err) => {
                warn!("{err}");
                extra_errors.push(err);
                None
            }
        }
    } else {
        info!("No adjacency rules file at {}", adjacency_path.display());
        None
    };

    let cities_path = config.cities_file();
    let cities = if args.skip_cities {
        None
    } else if cities_path.is_file() {
        match load_city_groups(&cities_path) {
            Ok(groups) => Some(groups),
            Err(err) => {
                warn!("{err}");
                extra_errors.push(err);
                None
            }
        }
    } else {
        info!("No cities file at {}", cities_path.display());
        None
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    Ok(LoadOutcome {
        report,
        adjacency,
        cities,
        extra_errors,
    })
}

/// Print the colored human-readable report
pub fn print_human_report(outcome: &LoadOutcome) {
    let stats = &outcome.report.stats;

    println!();
    println!("{}", "Map Data Load Report".bold());
    println!("{}", "====================".bold());
    println!(
        "  Region files:     {} discovered, {} loaded, {} failed",
        stats.files_discovered, stats.files_loaded, stats.files_failed
    );
    println!(
        "  Strategic regions: {} ({} weather periods)",
        stats.regions_loaded, stats.periods_loaded
    );
    if let Some(adjacency) = &outcome.adjacency {
        println!("  Adjacency rules:  {}", adjacency.len());
    }
    if let Some(cities) = &outcome.cities {
        println!("  City groups:      {}", cities.groups.len());
    }
    println!("  Elapsed:          {:.2}s", stats.elapsed.as_secs_f64());

    let errors: Vec<&LoadError> = outcome
        .report
        .errors
        .iter()
        .chain(outcome.extra_errors.iter())
        .collect();

    if errors.is_empty() {
        println!("  Status:           {}", "clean".green().bold());
    } else {
        println!(
            "  Status:           {}",
            format!("{} error(s)", errors.len()).red().bold()
        );
        println!();
        for error in errors {
            println!("  {} {error}", "error:".red());
        }
    }
    println!();
}
