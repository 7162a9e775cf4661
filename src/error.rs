//! Error handling for map data loading operations.
//!
//! Two layers of errors exist. [`ParseError`] describes what went wrong
//! inside one text blob (grammar, missing keys, bad literals) and carries no
//! file context. [`LoadError`] wraps a parse or validation failure with the
//! source path, and adds the batch-level failures (I/O, duplicate ids) that
//! only exist once files enter the picture.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the map data loader.
///
/// Defaults to [`LoadError`] but takes an override, so record-level code
/// can return `Result<T, ParseError>` through the same alias.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;

/// An error produced while parsing a single source text.
///
/// Parse errors are fatal for the record they occur in: the loader never
/// returns a partially populated structure alongside one of these.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The brace grammar itself is broken (unbalanced braces, a value
    /// where a key was expected, and so on). Fatal for the whole file.
    #[error("malformed structure at line {line}: {reason}")]
    MalformedStructure { line: usize, reason: String },

    /// A required key is absent from its enclosing block.
    #[error("missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// A literal did not parse as the numeric type its field requires.
    #[error("invalid number for '{field}': '{value}' ({reason})")]
    InvalidNumber {
        field: String,
        value: String,
        reason: String,
    },

    /// A literal did not match the non-numeric shape its field requires
    /// (e.g. a boolean that is neither `yes` nor `no`).
    #[error("invalid value for '{field}': '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ParseError {
    /// Create a malformed structure error at a source line
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedStructure {
            line,
            reason: reason.into(),
        }
    }

    /// Create a missing field error naming the absent key
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Create an invalid number error for a field and its offending literal
    pub fn invalid_number(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid value error for a non-numeric field
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// The name of the field this error is about, if it names one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedStructure { .. } => None,
            Self::MissingField { field, .. }
            | Self::InvalidNumber { field, .. }
            | Self::InvalidValue { field, .. } => Some(field),
        }
    }
}

/// A semantic check failure on an otherwise well-formed record.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A strategic region declared no provinces at all
    #[error("strategic region {id} has an empty province list")]
    EmptyProvinces { id: u32 },

    /// A strategic region declared an empty name
    #[error("strategic region {id} has an empty name")]
    EmptyName { id: u32 },

    /// An adjacency rule declared an empty name
    #[error("adjacency rule with empty name")]
    EmptyRuleName,

    /// A city group building entry listed no meshes
    #[error("city group {color_index} has a building entry with no meshes")]
    EmptyMeshList { color_index: u32 },
}

/// An error produced while loading map data from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O failure reading a source file or scanning a directory
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file failed to parse
    #[error("parse error in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A parsed record failed validation
    #[error("validation error in '{path}': {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    /// Two files declared the same strategic region id. Reported once per
    /// colliding pair, with both offending sources.
    #[error("duplicate strategic region id {id}: defined in '{first}' and '{second}'")]
    DuplicateId {
        id: u32,
        first: PathBuf,
        second: PathBuf,
    },

    /// Two adjacency rules in one file share a name
    #[error("duplicate adjacency rule '{name}' in '{path}'")]
    DuplicateRule { name: String, path: PathBuf },

    /// The source directory for a file kind does not exist
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A parallel parse worker panicked or was aborted
    #[error("worker task failed: {message}")]
    Worker { message: String },
}

impl LoadError {
    /// Create an I/O error with its source path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach a source path to a parse error
    pub fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Attach a source path to a validation error
    pub fn validation(path: impl Into<PathBuf>, source: ValidationError) -> Self {
        Self::Validation {
            path: path.into(),
            source,
        }
    }

    /// Create a duplicate id error referencing both sources
    pub fn duplicate_id(id: u32, first: impl Into<PathBuf>, second: impl Into<PathBuf>) -> Self {
        Self::DuplicateId {
            id,
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a worker failure error
    pub fn worker(message: impl Into<String>) -> Self {
        Self::Worker {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_outcome() -> Result<u32> {
        Ok(7)
    }

    fn record_outcome(ids: &[&str]) -> Result<Vec<u32>, ParseError> {
        ids.iter()
            .map(|id| {
                id.parse()
                    .map_err(|e: std::num::ParseIntError| {
                        ParseError::invalid_number("id", *id, e.to_string())
                    })
            })
            .collect::<Result<Vec<u32>, ParseError>>()
    }

    #[test]
    fn test_result_alias_defaults_to_load_error() {
        assert_eq!(batch_outcome().unwrap(), 7);
    }

    #[test]
    fn test_result_alias_accepts_an_overridden_error_type() {
        assert_eq!(record_outcome(&["3", "14"]).unwrap(), vec![3, 14]);
        assert!(matches!(
            record_outcome(&["3", "ocean"]),
            Err(ParseError::InvalidNumber { .. })
        ));
    }
}
