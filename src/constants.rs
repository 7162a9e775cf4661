//! Constants shared across the map data loader.

/// Conventional subdirectory holding one strategic region file per region
pub const STRATEGIC_REGIONS_DIR: &str = "map/strategic_regions";

/// Conventional location of the adjacency rules file
pub const ADJACENCY_RULES_FILE: &str = "map/adjacency_rules.txt";

/// Conventional location of the city placement file
pub const CITIES_FILE: &str = "map/cities.txt";

/// File extension of region script files
pub const REGION_FILE_EXTENSION: &str = "txt";

/// Root key of a strategic region file
pub const STRATEGIC_REGION_KEY: &str = "strategic_region";

/// Key of one weather period inside a `weather` block
pub const PERIOD_KEY: &str = "period";

/// Key of one rule inside the adjacency rules file
pub const ADJACENCY_RULE_KEY: &str = "adjacency_rule";

/// Key of one group inside the cities file
pub const CITY_GROUP_KEY: &str = "city_group";

/// The eight weather phenomenon weight fields, in source-data order.
///
/// These are weighted likelihoods, not strict probabilities: sums above 1.0
/// occur in real data and are accepted.
pub const PHENOMENON_FIELDS: [&str; 8] = [
    "no_phenomenon",
    "rain_light",
    "rain_heavy",
    "snow",
    "blizzard",
    "arctic_water",
    "mud",
    "sandstorm",
];

/// Highest zero-indexed day of a month in the `D.M` date notation
pub const MAX_DAY: u8 = 30;

/// Highest zero-indexed month of a year in the `D.M` date notation
pub const MAX_MONTH: u8 = 11;
