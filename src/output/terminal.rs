//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// A header row of quoted, right-aligned column names, highlighted.
pub fn header(columns: &[(&str, usize)]) -> String {
    let row = columns
        .iter()
        .map(|(name, width)| format_field(name, *width))
        .collect::<Vec<String>>()
        .join(",");
    row.bold().to_string()
}
