//! Parsing and validation of strategic region records

use crate::app::models::{StrategicRegion, WeatherPeriod};
use crate::app::services::script::{self, Block, extract};
use crate::constants::{PERIOD_KEY, STRATEGIC_REGION_KEY};
use crate::error::{ParseError, ValidationError};
use tracing::debug;

/// Parse the text of one region file into a [`StrategicRegion`].
///
/// The file must contain one `strategic_region = { ... }` block with `id`,
/// `name` and `provinces`; the `weather` block is optional and its periods
/// are kept in file order. Unknown keys anywhere are ignored.
pub fn parse_region(text: &str) -> Result<StrategicRegion, ParseError> {
    let root = script::parse_document(text)?;
    let block = extract::require_block(&root, STRATEGIC_REGION_KEY, "region file")?;

    let id = extract::require_u32(block, "id", STRATEGIC_REGION_KEY)?;
    let name = extract::require_scalar(block, "name", STRATEGIC_REGION_KEY)?.to_string();

    let provinces_block = extract::require_block(block, "provinces", STRATEGIC_REGION_KEY)?;
    let provinces = extract::u32_values(provinces_block, "provinces")?;

    let weather = match block.get_block("weather") {
        Some(weather_block) => extract_weather(weather_block)?,
        None => Vec::new(),
    };

    debug!(
        "Parsed strategic region {} '{}': {} provinces, {} weather periods",
        id,
        name,
        provinces.len(),
        weather.len()
    );

    Ok(StrategicRegion {
        id,
        name,
        provinces,
        weather,
    })
}

/// Parse a standalone weather block body: zero or more `period = { ... }`
/// entries, in source order.
pub fn parse_weather_block(text: &str) -> Result<Vec<WeatherPeriod>, ParseError> {
    let root = script::parse_document(text)?;
    extract_weather(&root)
}

/// Extract the periods of an already-parsed weather block
fn extract_weather(weather: &Block) -> Result<Vec<WeatherPeriod>, ParseError> {
    weather
        .blocks(PERIOD_KEY)
        .enumerate()
        .map(|(index, period)| extract_period(period, index))
        .collect()
}

/// Extract one weather period. Every field is required; a missing key
/// fails the record naming that key.
fn extract_period(block: &Block, index: usize) -> Result<WeatherPeriod, ParseError> {
    let context = format!("weather period {index}");

    Ok(WeatherPeriod {
        between: extract::require_day_month_pair(block, "between", &context)?,
        temperature: extract::require_f64_pair(block, "temperature", &context)?,
        temperature_day_night: extract::require_f64_pair(block, "temperature_day_night", &context)?,
        no_phenomenon: extract::require_weight(block, "no_phenomenon", &context)?,
        rain_light: extract::require_weight(block, "rain_light", &context)?,
        rain_heavy: extract::require_weight(block, "rain_heavy", &context)?,
        snow: extract::require_weight(block, "snow", &context)?,
        blizzard: extract::require_weight(block, "blizzard", &context)?,
        arctic_water: extract::require_weight(block, "arctic_water", &context)?,
        mud: extract::require_weight(block, "mud", &context)?,
        sandstorm: extract::require_weight(block, "sandstorm", &context)?,
        min_snow_level: extract::require_weight(block, "min_snow_level", &context)?,
    })
}

/// Validate one parsed region: non-empty name, non-empty province list.
///
/// Cross-file id uniqueness is the registry's job, not this function's.
pub fn validate_region(region: &StrategicRegion) -> Result<(), ValidationError> {
    if region.name.trim().is_empty() {
        return Err(ValidationError::EmptyName { id: region.id });
    }
    if region.provinces.is_empty() {
        return Err(ValidationError::EmptyProvinces { id: region.id });
    }
    Ok(())
}
