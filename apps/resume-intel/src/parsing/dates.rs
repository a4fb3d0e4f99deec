//! Shared date grammar for experience and education entries.
//!
//! Three range shapes, tried in order; the first that matches wins:
//! `Month YYYY - Month YYYY|Present`, `YYYY - YYYY|Present`, `MM/YYYY - MM/YYYY|Present`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Literal used for open-ended ranges ("Present", "Current", "Now" in any case).
pub const PRESENT: &str = "Present";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";
const OPEN_END: &str = r"present|current|now";
const RANGE_SEP: &str = r"\s*(?:-|–|—|to)\s*";

lazy_static! {
    static ref DATE_RULES: Vec<Regex> = vec![
        Regex::new(&format!(
            r"(?i)\b({MONTH}\s+\d{{4}}){RANGE_SEP}({MONTH}\s+\d{{4}}|{OPEN_END})\b"
        ))
        .unwrap(),
        Regex::new(&format!(
            r"(?i)(?:^|[^/\w])((?:19|20)\d{{2}}){RANGE_SEP}((?:19|20)\d{{2}}|{OPEN_END})\b"
        ))
        .unwrap(),
        Regex::new(&format!(
            r"(?i)\b(\d{{1,2}}/\d{{4}}){RANGE_SEP}(\d{{1,2}}/\d{{4}}|{OPEN_END})\b"
        ))
        .unwrap(),
    ];
}

/// A located date range: the parsed value plus the byte span from the start
/// date to the end date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub range: DateRange,
    pub start: usize,
    pub end: usize,
}

/// Finds the first date range in `text` using the ordered rules.
pub fn find_date_range(text: &str) -> Option<DateMatch> {
    DATE_RULES.iter().find_map(|rule| {
        let caps = rule.captures(text)?;
        let (from, to) = (caps.get(1)?, caps.get(2)?);
        Some(DateMatch {
            range: DateRange {
                start: from.as_str().trim().to_string(),
                end: normalize_end(to.as_str()),
            },
            start: from.start(),
            end: to.end(),
        })
    })
}

/// Parses the first date range in `text`.
pub fn parse_date_range(text: &str) -> Option<DateRange> {
    find_date_range(text).map(|m| m.range)
}

/// True when the line carries a parseable date range.
pub fn has_date_range(text: &str) -> bool {
    DATE_RULES.iter().any(|rule| rule.is_match(text))
}

/// Removes the first date range from `text`, returning the remainder.
pub fn strip_date_range(text: &str) -> String {
    match find_date_range(text) {
        Some(m) => format!("{}{}", &text[..m.start], &text[m.end..]),
        None => text.to_string(),
    }
}

fn normalize_end(raw: &str) -> String {
    let trimmed = raw.trim();
    if ["present", "current", "now"]
        .iter()
        .any(|word| trimmed.eq_ignore_ascii_case(word))
    {
        PRESENT.to_string()
    } else {
        trimmed.to_string()
    }
}
