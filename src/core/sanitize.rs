// src/core/sanitize.rs

/// Collapse whitespace runs (including newlines from nested markup) to a
/// single space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Search-term form used in listing URLs: trimmed, spaces → hyphens.
/// "Data Analyst" → "Data-Analyst"
pub fn hyphenate(term: &str) -> String {
    term.trim().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  3-6\n\t Yrs  "), "3-6 Yrs");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn hyphenate_replaces_each_space() {
        assert_eq!(hyphenate("Data Analyst"), "Data-Analyst");
        assert_eq!(hyphenate(" New  Delhi "), "New--Delhi");
        assert_eq!(hyphenate("bangalore"), "bangalore");
    }
}
