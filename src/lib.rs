//! Map Mod Data Loader
//!
//! A Rust library and CLI for loading the declarative data files of a
//! strategy-game map mod into validated in-memory structures.
//!
//! This library provides tools for:
//! - Parsing the shared brace-delimited `key = value` script grammar into a
//!   generic ordered tree
//! - Extracting typed strategic region records (id, name, provinces,
//!   seasonal weather periods) from region files
//! - Extracting adjacency rule and city placement records from their
//!   respective files
//! - Batch loading whole directories in parallel, collecting every error
//!   instead of stopping at the first
//! - Cross-file validation, notably duplicate region id detection
//!
//! The loader is a pure transform: files in, immutable values out. The game
//! engine that consumes the data (rendering, weather simulation, passage
//! rules) is entirely out of scope.

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod adjacency_loader;
        pub mod batch;
        pub mod city_loader;
        pub mod region_loader;
        pub mod script;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    AdjacencyLogic, AdjacencyRule, BuildingMesh, CityGroup, CityGroups, DayMonth, StrategicRegion,
    WeatherPeriod,
};
pub use app::services::region_loader::{StrategicRegions, parse_region, parse_weather_block};
pub use config::Config;
pub use error::{LoadError, ParseError, Result, ValidationError};
