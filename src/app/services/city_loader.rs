//! City placement loader
//!
//! Parses the cities file: the source bitmap path, the sampling steps, and
//! repeated `city_group = { ... }` blocks mapping bitmap palette indices to
//! building meshes by distance band. Placement itself (picking pixels,
//! instancing meshes) is the engine's job.

use crate::app::models::{BuildingMesh, CityGroup, CityGroups};
use crate::app::services::script::{self, Block, extract};
use crate::constants::CITY_GROUP_KEY;
use crate::error::{LoadError, ParseError, Result, ValidationError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Parse the text of the cities file
pub fn parse_city_groups(text: &str) -> Result<CityGroups, ParseError> {
    let root = script::parse_document(text)?;
    let context = "cities file";

    let types_source = PathBuf::from(extract::require_scalar(&root, "types_source", context)?);
    let pixel_step_x = extract::require_u32(&root, "pixel_step_x", context)?;
    let pixel_step_y = extract::require_u32(&root, "pixel_step_y", context)?;

    let groups = root
        .blocks(CITY_GROUP_KEY)
        .map(extract_group)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CityGroups {
        types_source,
        pixel_step_x,
        pixel_step_y,
        groups,
    })
}

fn extract_group(block: &Block) -> Result<CityGroup, ParseError> {
    let color_index = extract::require_u32(block, "color_index", CITY_GROUP_KEY)?;
    let context = format!("{CITY_GROUP_KEY} {color_index}");

    // Density may be negative: less dense than the baseline
    let density = extract::require_f64(block, "density", &context)?;

    let buildings = block
        .blocks("building")
        .map(|b| extract_building(b, &context))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CityGroup {
        color_index,
        density,
        buildings,
    })
}

fn extract_building(block: &Block, context: &str) -> Result<BuildingMesh, ParseError> {
    let distance = extract::require_f64(block, "distance", context)?;
    let mesh_block = extract::require_block(block, "mesh", context)?;
    let mesh = mesh_block.values().map(str::to_string).collect();
    Ok(BuildingMesh { distance, mesh })
}

/// Validate parsed city groups: every building band must name at least
/// one mesh.
pub fn validate_city_groups(groups: &CityGroups) -> Result<(), ValidationError> {
    for group in &groups.groups {
        for building in &group.buildings {
            if building.mesh.is_empty() {
                return Err(ValidationError::EmptyMeshList {
                    color_index: group.color_index,
                });
            }
        }
    }
    Ok(())
}

/// Load and validate the cities file
pub fn load_city_groups(path: &Path) -> Result<CityGroups> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let groups = parse_city_groups(&text).map_err(|e| LoadError::parse(path, e))?;
    validate_city_groups(&groups).map_err(|e| LoadError::validation(path, e))?;

    info!(
        "Loaded {} city groups from {}",
        groups.groups.len(),
        path.display()
    );
    Ok(groups)
}
