use anyhow::Context;
use clap::Parser;
use mapmod_loader::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {e}");
        process::exit(1);
    });

    let result: anyhow::Result<usize> = runtime.block_on(async {
        commands::run(args)
            .await
            .context("loading map data failed")
    });

    match result {
        Ok(0) => process::exit(0),
        Ok(_data_errors) => {
            // The report has already been printed; the exit code carries
            // the verdict for scripts
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(2);
        }
    }
}

/// Show help information when no subcommand is provided
fn show_help_and_commands() {
    println!("Map Mod Data Loader");
    println!("===================");
    println!();
    println!("Parses a map mod's strategic region weather files, adjacency rules and");
    println!("city placement configuration, collecting every error in the batch.");
    println!();
    println!("USAGE:");
    println!("    mapmod-loader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    load        Load every data file and print a summary report");
    println!("    validate    Load everything; exit non-zero if any file has errors");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Load a mod at its conventional layout:");
    println!("    mapmod-loader load /path/to/mod");
    println!();
    println!("    # Validate in CI with a machine-readable report:");
    println!("    mapmod-loader validate /path/to/mod --format json --quiet");
    println!();
    println!("For detailed help on any command, use:");
    println!("    mapmod-loader <COMMAND> --help");
}
