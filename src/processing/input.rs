//! Free-text network list parsing.

use regex::Regex;
use std::sync::OnceLock;

/// Separator between entries of a network list: commas, newlines, or both.
static LIST_SEPARATOR: OnceLock<Regex> = OnceLock::new();

fn get_list_separator() -> &'static Regex {
    LIST_SEPARATOR.get_or_init(|| Regex::new(r"[,\r\n]+").expect("Invalid Regex"))
}

/// Split a comma or newline separated list of networks into trimmed entries.
///
/// Empty entries are dropped, so `"10.0.0.0/8,, \n"` yields one entry.
pub fn split_network_list(raw: &str) -> Vec<&str> {
    get_list_separator()
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split every argument with [`split_network_list`] and flatten the result.
pub fn flatten_network_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| split_network_list(arg.as_ref()))
        .map(str::to_string)
        .collect()
}
