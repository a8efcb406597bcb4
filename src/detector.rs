use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect unit strings
    /// Matches: number (optional sign, optional decimal) + optional space + letters
    /// Examples: "100.2 KHz", "-3.40 mV", "5 GHz", "10mV"
    static ref UNIT_PATTERN: Regex = Regex::new(r"^-?\d+(\.\d+)?\s?[A-Za-z]+$").unwrap();
}

/// Check if a string looks like a unit expression.
/// Advisory only: a match means the shape is right, not that the prefix
/// and label will survive a full parse.
pub fn looks_like_unit_string(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    UNIT_PATTERN.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_detection() {
        assert!(looks_like_unit_string("100.2 KHz"));
        assert!(looks_like_unit_string("-3.40 mV"));
        assert!(looks_like_unit_string("5 GHz"));
        assert!(looks_like_unit_string("10mV"));
        assert!(looks_like_unit_string("  42 Hz  "));

        assert!(!looks_like_unit_string("100"));
        assert!(!looks_like_unit_string("Hz"));
        assert!(!looks_like_unit_string("hello world"));
        assert!(!looks_like_unit_string("1.5e3 Hz"));
        assert!(!looks_like_unit_string(""));
        assert!(!looks_like_unit_string("   "));
    }
}
