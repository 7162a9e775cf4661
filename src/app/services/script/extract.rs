//! Typed field extraction from parsed script blocks
//!
//! These helpers turn the generic tree into typed values with proper error
//! reporting: absent keys become `MissingField` naming the key, literals
//! that fail their declared numeric shape become `InvalidNumber` naming the
//! field and the offending text. Keys a caller never asks for are simply
//! never looked at, which is the whole forward-compatibility policy.

use super::tree::Block;
use crate::app::models::DayMonth;
use crate::error::ParseError;

/// Get a required nested block
pub fn require_block<'a>(
    block: &'a Block,
    field: &str,
    context: &str,
) -> Result<&'a Block, ParseError> {
    match block.get(field) {
        None => Err(ParseError::missing_field(field, context)),
        Some(value) => value.as_block().ok_or_else(|| {
            ParseError::invalid_value(
                field,
                value.as_scalar().unwrap_or_default(),
                "expected a { ... } block",
            )
        }),
    }
}

/// Get a required scalar field
pub fn require_scalar<'a>(
    block: &'a Block,
    field: &str,
    context: &str,
) -> Result<&'a str, ParseError> {
    match block.get(field) {
        None => Err(ParseError::missing_field(field, context)),
        Some(value) => value
            .as_scalar()
            .ok_or_else(|| ParseError::invalid_value(field, "{ ... }", "expected a scalar value")),
    }
}

/// Get an optional scalar field
pub fn optional_scalar<'a>(block: &'a Block, field: &str) -> Option<&'a str> {
    block.get_scalar(field)
}

/// Parse a required non-negative integer field
pub fn require_u32(block: &Block, field: &str, context: &str) -> Result<u32, ParseError> {
    let raw = require_scalar(block, field, context)?;
    parse_u32(field, raw)
}

/// Parse a required finite float field
pub fn require_f64(block: &Block, field: &str, context: &str) -> Result<f64, ParseError> {
    let raw = require_scalar(block, field, context)?;
    parse_f64(field, raw)
}

/// Parse a required non-negative finite float field (weather weights,
/// snow levels)
pub fn require_weight(block: &Block, field: &str, context: &str) -> Result<f64, ParseError> {
    let raw = require_scalar(block, field, context)?;
    let value = parse_f64(field, raw)?;
    if value < 0.0 {
        return Err(ParseError::invalid_number(
            field,
            raw,
            "expected a non-negative value",
        ));
    }
    Ok(value)
}

/// Parse a required `yes`/`no` boolean field
pub fn require_bool(block: &Block, field: &str, context: &str) -> Result<bool, ParseError> {
    let raw = require_scalar(block, field, context)?;
    match raw {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(ParseError::invalid_value(
            field,
            other,
            "expected 'yes' or 'no'",
        )),
    }
}

/// Parse a required block of exactly two bare floats, e.g.
/// `temperature = { -32.0 -2.0 }`
pub fn require_f64_pair(block: &Block, field: &str, context: &str) -> Result<(f64, f64), ParseError> {
    let inner = require_block(block, field, context)?;
    let raw: Vec<&str> = inner.values().collect();
    if raw.len() != 2 {
        return Err(ParseError::invalid_value(
            field,
            raw.join(" "),
            format!("expected exactly two values, found {}", raw.len()),
        ));
    }
    Ok((parse_f64(field, raw[0])?, parse_f64(field, raw[1])?))
}

/// Parse a required block of exactly two bare `D.M` dates, e.g.
/// `between = { 4.11 21.11 }`
pub fn require_day_month_pair(
    block: &Block,
    field: &str,
    context: &str,
) -> Result<(DayMonth, DayMonth), ParseError> {
    let inner = require_block(block, field, context)?;
    let raw: Vec<&str> = inner.values().collect();
    if raw.len() != 2 {
        return Err(ParseError::invalid_value(
            field,
            raw.join(" "),
            format!("expected exactly two dates, found {}", raw.len()),
        ));
    }
    Ok((
        parse_day_month(field, raw[0])?,
        parse_day_month(field, raw[1])?,
    ))
}

/// Parse every bare value of a block as a non-negative integer
/// (`provinces = { 4349 1516 ... }`)
pub fn u32_values(block: &Block, field: &str) -> Result<Vec<u32>, ParseError> {
    block.values().map(|raw| parse_u32(field, raw)).collect()
}

/// Parse every bare value of a block as a finite float
/// (`offset = { 3 0 -6 }`)
pub fn f64_values(block: &Block, field: &str) -> Result<Vec<f64>, ParseError> {
    block.values().map(|raw| parse_f64(field, raw)).collect()
}

/// Parse one literal as a non-negative integer
pub fn parse_u32(field: &str, raw: &str) -> Result<u32, ParseError> {
    raw.parse::<u32>()
        .map_err(|e| ParseError::invalid_number(field, raw, e.to_string()))
}

/// Parse one literal as a finite float
pub fn parse_f64(field: &str, raw: &str) -> Result<f64, ParseError> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| ParseError::invalid_number(field, raw, e.to_string()))?;
    if !value.is_finite() {
        return Err(ParseError::invalid_number(
            field,
            raw,
            "expected a finite value",
        ));
    }
    Ok(value)
}

/// Parse one literal as a zero-indexed `D.M` date
pub fn parse_day_month(field: &str, raw: &str) -> Result<DayMonth, ParseError> {
    raw.parse::<DayMonth>()
        .map_err(|e| ParseError::invalid_number(field, raw, e.to_string()))
}
