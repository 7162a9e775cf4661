//! Validate command: load everything, report in the requested format,
//! and let the exit code say whether the data is clean

use super::load::{LoadOutcome, execute, print_human_report};
use super::shared::setup_logging;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::Result;
use serde_json::json;
use tracing::info;

/// Run the validate command. Returns the total error count; the caller
/// maps a non-zero count to a non-zero exit code.
pub async fn run_validate(args: ValidateArgs) -> Result<usize> {
    setup_logging(&args.load)?;
    info!("Validating map data at {}", args.load.mod_root.display());

    let outcome = execute(&args.load).await?;

    match args.format {
        OutputFormat::Human => print_human_report(&outcome),
        OutputFormat::Json => print_json_report(&outcome)?,
    }

    Ok(outcome.total_errors())
}

/// Print the machine-readable JSON report to stdout
fn print_json_report(outcome: &LoadOutcome) -> Result<()> {
    let stats = &outcome.report.stats;

    let errors: Vec<String> = outcome
        .report
        .errors
        .iter()
        .chain(outcome.extra_errors.iter())
        .map(|e| e.to_string())
        .collect();

    let report = json!({
        "regions": {
            "files_discovered": stats.files_discovered,
            "files_loaded": stats.files_loaded,
            "files_failed": stats.files_failed,
            "loaded": stats.regions_loaded,
            "weather_periods": stats.periods_loaded,
            "ids": outcome.report.regions.sorted_ids(),
        },
        "adjacency_rules": outcome.adjacency.as_ref().map(|a| a.len()),
        "city_groups": outcome.cities.as_ref().map(|c| c.groups.len()),
        "elapsed_seconds": stats.elapsed.as_secs_f64(),
        "clean": errors.is_empty(),
        "errors": errors,
    });

    // Serialization of this shape cannot fail, but propagate anyway
    let rendered = serde_json::to_string_pretty(&report)
        .map_err(|e| crate::error::LoadError::worker(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}
