//! Data models for map mod data files
//!
//! This module contains the core data structures for the three file kinds
//! the loader understands: strategic region weather records, adjacency
//! rules, and city placement groups. All values are immutable once parsed;
//! a reload re-runs the whole transform.

pub mod adjacency;
pub mod city;
pub mod day_month;
pub mod region;

pub use adjacency::{AdjacencyLogic, AdjacencyRule};
pub use city::{BuildingMesh, CityGroup, CityGroups};
pub use day_month::DayMonth;
pub use region::{StrategicRegion, WeatherPeriod};
