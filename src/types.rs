use crate::prefix;

/// Result of parsing a unit string
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUnit {
    /// Numeric value scaled by the prefix order
    pub value: f64,
    /// Power-of-ten order of the matched prefix
    pub order: i32,
    /// Original input string for display
    pub original: String,
}

impl ParsedUnit {
    /// Canonical symbol for the matched prefix ("" when unprefixed)
    pub fn prefix(&self) -> &'static str {
        prefix::prefix_of(self.order).unwrap_or("")
    }
}
