//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// - `plural_s(1)` -> `""` (1 item)
/// - `plural_s(5)` -> `"s"` (5 items)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "item")` -> `"0 items"`
/// - `plural_count(1, "item")` -> `"1 item"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
