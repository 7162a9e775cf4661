//! Adjacency rule loader
//!
//! Parses the adjacency rules file: repeated `adjacency_rule = { ... }`
//! blocks sharing the region files' grammar, keyed by rule name. The rules
//! govern military and trade passage through named chokepoints; this loader
//! only carries the data, it never evaluates the triggers inside
//! `is_disabled`.

use crate::app::models::{AdjacencyLogic, AdjacencyRule};
use crate::app::services::script::{self, Block, extract};
use crate::constants::ADJACENCY_RULE_KEY;
use crate::error::{LoadError, ParseError, Result, ValidationError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Parse the text of the adjacency rules file into rules in source order
pub fn parse_adjacency_rules(text: &str) -> Result<Vec<AdjacencyRule>, ParseError> {
    let root = script::parse_document(text)?;
    root.blocks(ADJACENCY_RULE_KEY)
        .map(extract_rule)
        .collect()
}

fn extract_rule(block: &Block) -> Result<AdjacencyRule, ParseError> {
    let name = extract::require_scalar(block, "name", ADJACENCY_RULE_KEY)?.to_string();
    let context = format!("{ADJACENCY_RULE_KEY} '{name}'");

    let required_provinces_block = extract::require_block(block, "required_provinces", &context)?;
    let required_provinces = extract::u32_values(required_provinces_block, "required_provinces")?;

    let offset_block = extract::require_block(block, "offset", &context)?;
    let offset = extract::f64_values(offset_block, "offset")?;

    // The disable condition is opaque data: only the tooltip is kept,
    // trigger evaluation belongs to the engine
    let is_disabled_tooltip = block
        .get_block("is_disabled")
        .and_then(|b| extract::optional_scalar(b, "tooltip"))
        .map(str::to_string);

    Ok(AdjacencyRule {
        contested: extract_logic(block, "contested", &context)?,
        enemy: extract_logic(block, "enemy", &context)?,
        friend: extract_logic(block, "friend", &context)?,
        neutral: extract_logic(block, "neutral", &context)?,
        required_provinces,
        icon: extract::require_u32(block, "icon", &context)?,
        offset,
        is_disabled_tooltip,
        name,
    })
}

fn extract_logic(block: &Block, field: &str, context: &str) -> Result<AdjacencyLogic, ParseError> {
    let logic = extract::require_block(block, field, context)?;
    Ok(AdjacencyLogic {
        army: extract::require_bool(logic, "army", field)?,
        navy: extract::require_bool(logic, "navy", field)?,
        submarine: extract::require_bool(logic, "submarine", field)?,
        trade: extract::require_bool(logic, "trade", field)?,
    })
}

/// The adjacency rules of one map, keyed by rule name
#[derive(Debug, Clone, Default)]
pub struct AdjacencyRules {
    rules: HashMap<String, AdjacencyRule>,
    source: PathBuf,
}

impl AdjacencyRules {
    /// Load the adjacency rules file.
    ///
    /// Fails on I/O or parse errors, on an empty rule name, and on two
    /// rules sharing a name.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let rules = parse_adjacency_rules(&text).map_err(|e| LoadError::parse(path, e))?;

        let mut by_name = HashMap::with_capacity(rules.len());
        for rule in rules {
            if rule.name.trim().is_empty() {
                return Err(LoadError::validation(path, ValidationError::EmptyRuleName));
            }
            if by_name.contains_key(&rule.name) {
                return Err(LoadError::DuplicateRule {
                    name: rule.name,
                    path: path.to_path_buf(),
                });
            }
            debug!("Registered adjacency rule '{}'", rule.name);
            by_name.insert(rule.name.clone(), rule);
        }

        info!(
            "Loaded {} adjacency rules from {}",
            by_name.len(),
            path.display()
        );
        Ok(Self {
            rules: by_name,
            source: path.to_path_buf(),
        })
    }

    /// Look up a rule by name
    pub fn get(&self, name: &str) -> Option<&AdjacencyRule> {
        self.rules.get(name)
    }

    /// Number of loaded rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether any rules were loaded
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in ascending order
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The file the rules were loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }
}
