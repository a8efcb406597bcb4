use lazy_static::lazy_static;
use regex::Regex;

use crate::error::UnitError;
use crate::prefix;
use crate::types::ParsedUnit;

lazy_static! {
    /// Matches unit strings of the form `Value PrefixUnit`, ie. `10.2 KHz`:
    /// optional sign, digits with at most one decimal point, optional
    /// single space, then the prefix+label letters
    static ref UNIT_PATTERN: Regex =
        Regex::new(r"^(-?\d+(?:\.\d+)?) ?([A-Za-z]+)$").unwrap();
}

/// Parse a unit string into its numeric value and prefix order.
/// The letters token must end with `unit`; whatever precedes it must be a
/// known SI prefix (or nothing).
pub fn parse_unit(unit: &str, input: &str) -> Result<ParsedUnit, UnitError> {
    let captures = UNIT_PATTERN
        .captures(input)
        .ok_or_else(|| UnitError::MalformedInput {
            input: input.to_string(),
            unit: unit.to_string(),
        })?;

    let number = &captures[1];
    let letters = &captures[2];

    let prefix_str = letters
        .strip_suffix(unit)
        .ok_or_else(|| UnitError::SuffixMismatch {
            found: letters.to_string(),
            expected: unit.to_string(),
        })?;

    let order = prefix::order_of(prefix_str)
        .ok_or_else(|| UnitError::UnrecognisedPrefix(prefix_str.to_string()))?;

    let base: f64 = number
        .parse()
        .map_err(|_| UnitError::InvalidNumber(number.to_string()))?;

    let value = base * 10f64.powi(order);
    // A numeral long enough to overflow parses (or scales) to infinity
    if !value.is_finite() {
        return Err(UnitError::InvalidNumber(number.to_string()));
    }

    Ok(ParsedUnit {
        value,
        order,
        original: input.to_string(),
    })
}

/// Parse a unit string and return the scaled numeric value
pub fn parse_unit_string(unit: &str, input: &str) -> Result<f64, UnitError> {
    parse_unit(unit, input).map(|parsed| parsed.value)
}
