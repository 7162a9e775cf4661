//! City placement configuration: bitmap palette indices mapped to building
//! meshes for procedural city rendering.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The whole cities file: the source bitmap and its color groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityGroups {
    /// Path of the cities bitmap, as written in the file
    pub types_source: PathBuf,

    /// Horizontal sampling step over the bitmap, in pixels
    pub pixel_step_x: u32,

    /// Vertical sampling step over the bitmap, in pixels
    pub pixel_step_y: u32,

    /// City groups in file order
    pub groups: Vec<CityGroup>,
}

/// One bitmap-color-index group of building meshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityGroup {
    /// Color index in the bitmap palette
    pub color_index: u32,

    /// Building density in fraction of pixels; negative means less dense
    pub density: f64,

    /// Building meshes, sorted in the file by growing distance
    pub buildings: Vec<BuildingMesh>,
}

/// The meshes usable at one distance band of an urban area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingMesh {
    /// Distance to the edge of the urban area, in map pixels
    pub distance: f64,

    /// Candidate mesh ids for this band
    pub mesh: Vec<String>,
}
