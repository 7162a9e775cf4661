//! Adjacency rules: passage policy for named chokepoints (canals, straits).

use serde::{Deserialize, Serialize};

/// Which unit classes may pass through an adjacency under one control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyLogic {
    /// Whether armies can pass
    pub army: bool,
    /// Whether fleets can pass
    pub navy: bool,
    /// Whether submarines can pass
    pub submarine: bool,
    /// Whether trade can pass
    pub trade: bool,
}

/// A named rule controlling passage through a chokepoint, keyed by the
/// control state of its required provinces.
///
/// The loader parses these as data only. Evaluating who currently controls
/// the provinces, or the conditions inside `is_disabled`, is the consuming
/// engine's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyRule {
    /// Name of the rule, unique within the rules file
    pub name: String,

    /// Passage logic while the chokepoint is contested
    pub contested: AdjacencyLogic,

    /// Passage logic while an enemy controls the chokepoint
    pub enemy: AdjacencyLogic,

    /// Passage logic while a friend controls the chokepoint
    pub friend: AdjacencyLogic,

    /// Passage logic while a neutral power controls the chokepoint
    pub neutral: AdjacencyLogic,

    /// Provinces whose control state selects the logic above
    pub required_provinces: Vec<u32>,

    /// Province on which the crossing icon is shown
    pub icon: u32,

    /// Graphical offset of the icon, as given (typically three values)
    pub offset: Vec<f64>,

    /// Tooltip of the rule's disable condition, captured verbatim. The
    /// trigger expressions inside the block are not interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled_tooltip: Option<String>,
}
