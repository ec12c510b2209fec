//! Data formatting helpers.
//!
//! Provides the formatting used when reporting visitor results: real
//! results (sum, product) with an optional fixed precision, and the XOR
//! checksum as a plain integer in `0..=255`.

use crate::{Checksum, Real};

/// Format a real number with the given number of decimal places.
pub fn format_real(value: Real, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format a real result.
///
/// `None` prints the shortest representation that round-trips
/// (`45.0` → `"45"`, `0.5` → `"0.5"`); `Some(n)` prints exactly `n` decimals.
pub fn format_result(value: Real, precision: Option<usize>) -> String {
    match precision {
        Some(decimals) => format_real(value, decimals),
        None => format!("{value}"),
    }
}

/// Format a checksum as a decimal integer (e.g. `0x6C` → `"108"`).
pub fn format_checksum(value: Checksum) -> String {
    value.to_string()
}
