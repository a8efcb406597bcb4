// SI unit string encoding and decoding over a fixed prefix table
// Encoding: (unit label, value) -> "1.50 KHz"
// Decoding: (unit label, "1.50 KHz") -> value

pub mod detector;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod prefix;
pub mod types;


pub use detector::looks_like_unit_string;
pub use error::UnitError;
pub use formatter::format_unit_string;
pub use parser::{parse_unit, parse_unit_string};
pub use prefix::{order_of, prefix_of, ORDERS, PREFIXES};
pub use types::ParsedUnit;
