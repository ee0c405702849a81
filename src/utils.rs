//! String helpers shared by the option resolvers.
//!

/// Splits a comma-separated option value into its tokens.
///
/// The split is literal: tokens are not trimmed, empty tokens produced by
/// adjacent, leading or trailing commas are kept, and order is preserved.
/// An empty input yields no tokens at all rather than one empty token.
pub fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

/// Returns `Some(value)` unless `value` is empty.
#[inline]
pub fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
