//! Command implementations for the map data loader CLI
//!
//! Each command lives in its own module; this module only dispatches.

pub mod load;
pub mod shared;
pub mod validate;

use crate::cli::args::{Args, Commands};
use crate::error::{LoadError, Result};

/// Dispatch to the requested subcommand.
///
/// Returns the number of data errors encountered; the binary maps that to
/// its exit code.
pub async fn run(args: Args) -> Result<usize> {
    match args.command {
        Some(Commands::Load(load_args)) => load::run_load(load_args).await,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        None => Err(LoadError::configuration(
            "no command given; see --help for usage",
        )),
    }
}
