//! Entry Splitter: divides a section's lines into one group per job, degree or project.

use crate::parsing::dates::has_date_range;
use crate::text::{contains_whole_word, is_bullet};

/// Words that mark a line as a job title.
pub const TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "manager",
    "lead",
    "architect",
    "analyst",
    "designer",
    "intern",
    "director",
    "specialist",
    "consultant",
    "senior",
    "junior",
];

/// Words that mark a line as naming an institution.
pub const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school", "academy"];

const MAX_PROJECT_TITLE_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    AwaitingEntry,
    Accumulating,
}

/// True when `line` contains one of `keywords` as a whole word (case-insensitive).
pub fn has_keyword(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|k| contains_whole_word(&lower, k))
}

/// Splits experience or education lines into entries.
///
/// A boundary needs all of: a blank line since the last content line, a
/// non-bullet line, and either a keyword on that line or a date range on it
/// or on the next non-blank line. A wrapped bullet therefore never starts a
/// new entry, and a section with no blank lines stays a single entry.
pub fn split_entries(lines: &[String], keywords: &[&str]) -> Vec<Vec<String>> {
    let mut entries = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut state = SplitState::AwaitingEntry;
    let mut blank_seen = false;

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            blank_seen = true;
            continue;
        }

        match state {
            SplitState::AwaitingEntry => {
                current.push(trimmed.to_string());
                state = SplitState::Accumulating;
            }
            SplitState::Accumulating => {
                if blank_seen && starts_entry(lines, idx, keywords) {
                    entries.push(std::mem::take(&mut current));
                }
                current.push(trimmed.to_string());
            }
        }
        blank_seen = false;
    }

    if !current.is_empty() {
        entries.push(current);
    }
    entries
}

fn starts_entry(lines: &[String], idx: usize, keywords: &[&str]) -> bool {
    let line = &lines[idx];
    if is_bullet(line) {
        return false;
    }
    if has_keyword(line, keywords) || has_date_range(line) {
        return true;
    }
    next_non_blank(lines, idx)
        .map(|next| !is_bullet(next) && has_date_range(next))
        .unwrap_or(false)
}

fn next_non_blank(lines: &[String], idx: usize) -> Option<&str> {
    lines[idx + 1..]
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
}

/// Splits project lines into one group per project.
///
/// A new project starts at a short, non-bullet line that begins with a capital
/// letter or a quote, once the previous project has been closed by a blank line.
pub fn split_projects(lines: &[String]) -> Vec<Vec<String>> {
    let mut projects = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut blank_seen = false;

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            blank_seen = true;
            continue;
        }
        if !current.is_empty() && blank_seen && looks_like_project_title(trimmed) {
            projects.push(std::mem::take(&mut current));
        }
        current.push(trimmed.to_string());
        blank_seen = false;
    }

    if !current.is_empty() {
        projects.push(current);
    }
    projects
}

fn looks_like_project_title(line: &str) -> bool {
    if is_bullet(line) || line.chars().count() >= MAX_PROJECT_TITLE_CHARS {
        return false;
    }
    line.chars()
        .next()
        .map(|c| c.is_uppercase() || matches!(c, '"' | '\'' | '“' | '‘'))
        .unwrap_or(false)
}
