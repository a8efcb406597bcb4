use lazy_static::lazy_static;
use std::collections::HashMap;

/// SI prefixes supported for encoding and decoding, in ascending order.
/// The empty string is the "no prefix" entry at order 0.
pub const PREFIXES: [&str; 9] = ["p", "n", "u", "m", "", "K", "M", "G", "T"];

/// Power-of-ten order associated with each entry of `PREFIXES`
pub const ORDERS: [i32; 9] = [-12, -9, -6, -3, 0, 3, 6, 9, 12];

lazy_static! {
    static ref PREFIX_TO_ORDER: HashMap<&'static str, i32> =
        PREFIXES.iter().copied().zip(ORDERS).collect();
    static ref ORDER_TO_PREFIX: HashMap<i32, &'static str> =
        ORDERS.iter().copied().zip(PREFIXES).collect();
}

/// Look up the power-of-ten order for a prefix symbol.
/// Exact match only; the empty string maps to order 0.
pub fn order_of(prefix: &str) -> Option<i32> {
    PREFIX_TO_ORDER.get(prefix).copied()
}

/// Look up the prefix symbol for a power-of-ten order.
/// Only the nine multiples of 3 in [-12, 12] have entries.
pub fn prefix_of(order: i32) -> Option<&'static str> {
    ORDER_TO_PREFIX.get(&order).copied()
}

/// Comma-separated list of the non-empty prefix symbols, for error messages
pub fn prefix_options() -> String {
    PREFIXES
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}
