//! Strategic region record loader
//!
//! Turns the text of one region file into a validated [`StrategicRegion`],
//! and accumulates regions from many files into a [`StrategicRegions`]
//! registry that refuses duplicate ids.
//!
//! The contract is all-or-nothing: a file either yields a fully populated
//! record or a structured error, never a partial success.
//!
//! ## Usage
//!
//! ```rust
//! use mapmod_loader::app::services::region_loader::parse_region;
//!
//! # fn example() -> Result<(), mapmod_loader::ParseError> {
//! let region = parse_region(
//!     "strategic_region = { id = 1 name = \"REGION\" provinces = { 10 11 } }",
//! )?;
//! assert_eq!(region.provinces.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod registry;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{parse_region, parse_weather_block, validate_region};
pub use registry::StrategicRegions;
