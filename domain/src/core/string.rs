//! String utilities for the domain layer.
//!
//! Quiz markup is arbitrary text, so every slice here is taken on `char`
//! boundaries rather than bytes.

/// Drop the first `count` characters of `s`.
///
/// Returns an empty string when `s` has fewer than `count` characters.
pub fn skip_chars(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// Take at most the first `count` characters of `s`.
pub fn take_chars(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
