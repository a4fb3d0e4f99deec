//! Project entry extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::ResumeProject;
use crate::text::{is_bullet, strip_bullet};

lazy_static! {
    static ref URL: Regex = Regex::new(r"https?://[^\s<>()]+").unwrap();
    static ref TECH_LINE: Regex =
        Regex::new(r"(?i)^(?:technologies|tech\s+stack|built\s+with|stack|tools)\s*:\s*(.*)$").unwrap();
    static ref TECH_SPLIT: Regex = Regex::new(r"[,;|]").unwrap();
    static ref NAME_SPLIT: Regex = Regex::new(r"\s+[-–—|]\s+|:\s+").unwrap();
}

const URL_TRAILING: &[char] = &['.', ',', ';', ':', ')', ']', '"', '\''];

/// Parses one project group. Returns `None` for an empty group.
pub fn parse_project_entry(lines: &[String]) -> Option<ResumeProject> {
    let mut url = None;
    let mut cleaned: Vec<(bool, String)> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut text = trimmed.to_string();
        if url.is_none() {
            if let Some(m) = URL.find(trimmed) {
                let found = m.as_str().trim_end_matches(URL_TRAILING);
                url = Some(found.to_string());
                text = format!("{}{}", &trimmed[..m.start()], &trimmed[m.start() + found.len()..]);
            }
        }
        let text = text.trim().to_string();
        if !text.is_empty() {
            cleaned.push((is_bullet(&text), text));
        }
    }

    let (_, first) = cleaned.first()?.clone();
    let first = strip_bullet(&first).to_string();
    let (name, first_rest) = match NAME_SPLIT.find(&first) {
        Some(m) => (
            first[..m.start()].trim().to_string(),
            Some(first[m.end()..].trim().to_string()).filter(|s| !s.is_empty()),
        ),
        None => (first.clone(), None),
    };
    let name = name.trim_matches(|c: char| matches!(c, '"' | '“' | '”')).to_string();

    let mut technologies = Vec::new();
    let mut prose = Vec::new();
    let mut bullets = Vec::new();
    if let Some(rest) = first_rest {
        prose.push(rest);
    }

    for (marked, text) in cleaned.iter().skip(1) {
        let body = strip_bullet(text);
        if let Some(caps) = TECH_LINE.captures(body) {
            if technologies.is_empty() {
                technologies = TECH_SPLIT
                    .split(&caps[1])
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
                continue;
            }
        }
        if *marked {
            bullets.push(body.to_string());
        } else {
            prose.push(body.to_string());
        }
    }

    let description = if !prose.is_empty() {
        Some(prose.join(" "))
    } else if !bullets.is_empty() {
        Some(bullets.join(" "))
    } else {
        None
    };

    Some(ResumeProject {
        name,
        description,
        technologies,
        url,
    })
}
