//! Small string helpers shared by the parsers and the matching rules.

use std::collections::HashSet;

/// Characters that mark a line as a bullet point.
pub const BULLET_MARKERS: &[char] = &['•', '-', '*', '▪', '◦', '→'];

/// Character budget applied before the heaviest passes (taxonomy scans, job analysis).
pub const MAX_SCAN_CHARS: usize = 4_000;

/// Returns true when the trimmed line starts with a bullet marker.
pub fn is_bullet(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .map(|c| BULLET_MARKERS.contains(&c))
        .unwrap_or(false)
}

/// Strips leading bullet markers and surrounding whitespace.
pub fn strip_bullet(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c.is_whitespace())
        .trim_end()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word containment. A boundary is the start/end of the text or any
/// character that is neither alphanumeric nor `_`, so terms like `c++`,
/// `.net` or `ci/cd` behave as expected. Comparison is case-sensitive;
/// callers pass lower-cased text and terms.
pub fn contains_whole_word(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, matched)| {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map(|c| !is_word_char(c))
            .unwrap_or(true);
        let after_ok = haystack[start + matched.len()..]
            .chars()
            .next()
            .map(|c| !is_word_char(c))
            .unwrap_or(true);
        before_ok && after_ok
    })
}

/// Truncates to at most `max_chars` characters without splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Removes case-insensitive duplicates, keeping the first spelling seen.
pub fn dedup_case_insensitive<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let item: String = item.into();
        if seen.insert(item.to_lowercase()) {
            out.push(item);
        }
    }
    out
}

/// Rounds a score to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bullet_recognizes_every_marker() {
        for line in ["• a", "- b", "* c", "▪ d", "◦ e", "→ f", "   • indented"] {
            assert!(is_bullet(line), "{line} should be a bullet");
        }
        assert!(!is_bullet("Senior Engineer"));
        assert!(!is_bullet(""));
    }

    #[test]
    fn test_strip_bullet_removes_marker_and_spaces() {
        assert_eq!(strip_bullet("  •  Led team of 5  "), "Led team of 5");
        assert_eq!(strip_bullet("→Shipped v2"), "Shipped v2");
        assert_eq!(strip_bullet("No marker"), "No marker");
    }

    #[test]
    fn test_whole_word_rejects_substrings() {
        assert!(contains_whole_word("we use go daily", "go"));
        assert!(!contains_whole_word("google cloud", "go"));
        assert!(!contains_whole_word("mysql", "sql"));
        assert!(contains_whole_word("sql, python", "sql"));
    }

    #[test]
    fn test_whole_word_handles_symbol_terms() {
        assert!(contains_whole_word("strong c++ skills", "c++"));
        assert!(contains_whole_word("asp.net and .net core", ".net"));
        assert!(contains_whole_word("owned ci/cd pipelines", "ci/cd"));
        assert!(!contains_whole_word("c++17", "c++"));
    }

    #[test]
    fn test_whole_word_checks_later_occurrences() {
        assert!(contains_whole_word("golang then go", "go"));
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_dedup_case_insensitive_keeps_first_spelling() {
        let out = dedup_case_insensitive(vec!["Python", "python", "SQL", "PYTHON", "sql"]);
        assert_eq!(out, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.7), 0.7);
        assert_eq!(round2(2.0 / 3.0), 0.67);
    }
}
