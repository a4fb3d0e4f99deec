//! Experience entry extraction: title, company, dates, location and bullets.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::ResumeExperience;
use crate::parsing::dates::{find_date_range, strip_date_range};
use crate::parsing::splitter::{has_keyword, TITLE_KEYWORDS};
use crate::text::{is_bullet, strip_bullet};

/// Company placeholder when only a title could be recovered.
pub const UNKNOWN_COMPANY: &str = "Unknown";

const MAX_BULLETS: usize = 10;
const MIN_BULLET_CHARS: usize = 10;
/// Dates and location are only looked for in the first few lines of an entry.
const HEADER_SCAN_LINES: usize = 3;

lazy_static! {
    static ref AT_SPLIT: Regex = Regex::new(r"(?i)^(.+?)\s+at\s+(.+)$").unwrap();
    static ref DASH_PIPE_SPLIT: Regex = Regex::new(r"\s+[-–—]\s+|\s*\|\s*").unwrap();
    static ref LOCATION: Regex = Regex::new(
        r"\b([A-Z][A-Za-z.]+(?: [A-Z][A-Za-z.]+){0,2}), ?([A-Z]{2}\b|USA|United States|United Kingdom|UK|Canada|Germany|France|India|Australia|Ireland|Netherlands|Spain|Singapore|Japan|Remote)"
    )
    .unwrap();
}

const SEPARATOR_CHARS: &[char] = &['|', '-', '–', '—', ',', '·', '(', ')', ' '];

fn clean_fragment(text: &str) -> String {
    text.trim_matches(|c: char| SEPARATOR_CHARS.contains(&c) || c.is_whitespace())
        .to_string()
}

/// Finds a "City, ST" or "City, Country" location in the line.
pub fn find_location(line: &str) -> Option<String> {
    LOCATION.find(line).map(|m| m.as_str().trim().to_string())
}

fn strip_location(line: &str) -> String {
    match LOCATION.find(line) {
        Some(m) => format!("{}{}", &line[..m.start()], &line[m.end()..]),
        None => line.to_string(),
    }
}

/// Resolves title and company from a header line via three ordered fallbacks:
/// `<title> at <company>`, a dash/pipe split where the keyword segment is the
/// title, and finally the whole line as title with an unknown company.
pub fn split_title_company(header: &str) -> (String, String) {
    let header = header.trim();

    if let Some(caps) = AT_SPLIT.captures(header) {
        let title = clean_fragment(&caps[1]);
        let company = clean_fragment(&caps[2]);
        if !title.is_empty() && !company.is_empty() {
            return (title, company);
        }
    }

    let segments: Vec<String> = DASH_PIPE_SPLIT
        .split(header)
        .map(clean_fragment)
        .filter(|s| !s.is_empty())
        .collect();
    if segments.len() >= 2 {
        if let Some(title_idx) = segments.iter().position(|s| has_keyword(s, TITLE_KEYWORDS)) {
            let company = segments
                .iter()
                .enumerate()
                .find(|(i, _)| *i != title_idx)
                .map(|(_, s)| s.clone())
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string());
            return (segments[title_idx].clone(), company);
        }
    }

    (header.to_string(), UNKNOWN_COMPANY.to_string())
}

/// Parses one experience entry. Returns `None` for an empty group.
pub fn parse_experience_entry(lines: &[String]) -> Option<ResumeExperience> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    let first = *lines.first()?;

    let head_lines = &lines[..lines.len().min(HEADER_SCAN_LINES)];
    let dates = head_lines.iter().find_map(|l| find_date_range(l));
    let location = head_lines.iter().find_map(|l| find_location(l));

    let header = clean_fragment(&strip_location(&strip_date_range(strip_bullet(first))));
    let (title, company) = if header.is_empty() {
        (clean_fragment(strip_bullet(first)), UNKNOWN_COMPANY.to_string())
    } else {
        split_title_company(&header)
    };

    let bullets = collect_bullets(&lines[1..]);

    Some(ResumeExperience {
        company,
        title,
        start_date: dates.as_ref().map(|d| d.range.start.clone()),
        end_date: dates.map(|d| d.range.end),
        location,
        bullets,
    })
}

fn collect_bullets(lines: &[&str]) -> Vec<String> {
    let mut bullets: Vec<String> = Vec::new();
    let mut last_was_marked = false;

    for (offset, line) in lines.iter().enumerate() {
        let marked = is_bullet(line);
        let text = strip_bullet(line);

        // Header-area lines that only carry a date range or a location.
        if !marked && offset + 1 < HEADER_SCAN_LINES {
            let residue = clean_fragment(&strip_location(&strip_date_range(text)));
            if residue.chars().count() < MIN_BULLET_CHARS && residue.len() < text.len() {
                last_was_marked = false;
                continue;
            }
        }

        // Lowercase continuation of a wrapped bullet.
        if !marked && last_was_marked && text.chars().next().is_some_and(char::is_lowercase) {
            if let Some(prev) = bullets.last_mut() {
                prev.push(' ');
                prev.push_str(text);
                continue;
            }
        }

        last_was_marked = marked;
        if text.chars().count() < MIN_BULLET_CHARS {
            continue;
        }
        bullets.push(text.to_string());
    }

    bullets.truncate(MAX_BULLETS);
    bullets
}
