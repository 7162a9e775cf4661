//! Registry of loaded strategic regions, keyed by id
//!
//! The registry is the single cross-file coordination point: individual
//! files parse independently, then every parsed region is inserted here and
//! a second definition of an id is reported as a duplicate instead of
//! silently overwriting the first.

use crate::app::models::StrategicRegion;
use crate::error::{LoadError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// All strategic regions loaded in one session
#[derive(Debug, Clone, Default)]
pub struct StrategicRegions {
    regions: HashMap<u32, StrategicRegion>,
    sources: HashMap<u32, PathBuf>,
}

impl StrategicRegions {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parsed region, recording which file it came from.
    ///
    /// Fails with [`LoadError::DuplicateId`] naming both sources when the
    /// id is already taken; the registry keeps the first definition.
    pub fn insert(&mut self, region: StrategicRegion, source: &Path) -> Result<()> {
        if let Some(first) = self.sources.get(&region.id) {
            return Err(LoadError::duplicate_id(region.id, first.clone(), source));
        }

        debug!(
            "Registered strategic region {} '{}' from {}",
            region.id,
            region.name,
            source.display()
        );
        self.sources.insert(region.id, source.to_path_buf());
        self.regions.insert(region.id, region);
        Ok(())
    }

    /// Look up a region by id
    pub fn get(&self, id: u32) -> Option<&StrategicRegion> {
        self.regions.get(&id)
    }

    /// The file a region was loaded from
    pub fn source(&self, id: u32) -> Option<&Path> {
        self.sources.get(&id).map(PathBuf::as_path)
    }

    /// Number of loaded regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Region ids in ascending order
    pub fn sorted_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.regions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over the loaded regions (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &StrategicRegion> {
        self.regions.values()
    }

    /// Total number of weather periods across every region
    pub fn total_periods(&self) -> usize {
        self.regions.values().map(|r| r.weather.len()).sum()
    }
}
