//! Textual transforms applied to user-entered filter strings.
//!
//! These are deliberately literal.  The ignore pattern is *not* escaped: a
//! user who types `.` or `+` gets regex semantics for those characters.

/// Turns a glob-like ignore pattern into a regular-expression fragment.
///
/// Every `*` becomes the digit class `[0-9]`, then every space becomes the
/// alternation operator `|`.  No other character is touched.
///
/// ```
/// use callerinfo_core::domain::pattern::ignore_pattern_to_regex;
/// assert_eq!(ignore_pattern_to_regex("1* 2*"), "1[0-9]|2[0-9]");
/// ```
pub fn ignore_pattern_to_regex(raw: &str) -> String {
    raw.replace('*', "[0-9]").replace(' ', "|")
}

/// Trims `raw`; a blank result is replaced by `default`.
///
/// An explicitly stored but whitespace-only value is treated the same as an
/// absent one.
pub fn keywords_or_default(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
