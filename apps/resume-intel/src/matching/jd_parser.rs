//! JD Parser: extracts required/preferred skills, seniority, responsibilities and
//! keywords from a raw job description.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::taxonomy;
use crate::text::{contains_whole_word, dedup_case_insensitive, truncate_chars, MAX_SCAN_CHARS};

const MAX_RESPONSIBILITIES: usize = 5;
const MIN_RESPONSIBILITY_CHARS: usize = 20;

/// Seniority the posting asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "entry-level")]
    EntryLevel,
    #[serde(rename = "mid-level")]
    MidLevel,
    #[serde(rename = "senior")]
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "entry-level",
            ExperienceLevel::MidLevel => "mid-level",
            ExperienceLevel::Senior => "senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized requirements of a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    /// First five action-verb sentences, in source order.
    pub key_responsibilities: Vec<String>,
    pub keywords: Vec<String>,
}

impl JobAnalysis {
    /// Required then preferred skills.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.required_skills
            .iter()
            .chain(self.preferred_skills.iter())
            .map(String::as_str)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule tables
// ────────────────────────────────────────────────────────────────────────────

/// Verbs that mark a sentence as a responsibility. Substring match.
pub const ACTION_VERBS: &[&str] = &[
    "build", "develop", "design", "implement", "create", "maintain", "lead", "collaborate",
    "write", "test", "deploy", "optimize", "architect", "scale", "manage", "mentor", "review",
    "troubleshoot", "analyze", "integrate", "automate", "improve", "ensure", "support",
];

/// Hyphen, en dash or em dash between the two ends of a year range.
const YEAR_DASH: &str = r"\s*[-–—]\s*";

lazy_static! {
    static ref REQUIRED_MARKER: Regex =
        Regex::new(r"\b(?:required|must[- ]have|requirements?|qualifications?)\b").unwrap();
    static ref PREFERRED_MARKER: Regex =
        Regex::new(r"\b(?:preferred|nice[- ]to[- ]have|bonus|desired)\b").unwrap();
    static ref PREFERRED_END: Regex = Regex::new(r"\b(?:responsibilities|about)\b").unwrap();

    /// Seniority rules, first match wins.
    static ref LEVEL_RULES: Vec<(Regex, ExperienceLevel)> = vec![
        (
            Regex::new(r"\b(?:senior|lead|principal|staff|architect)\b").unwrap(),
            ExperienceLevel::Senior,
        ),
        (
            Regex::new(&format!(
                r"\bmid[- ]?level\b|\b(?:3{YEAR_DASH}5|4{YEAR_DASH}6|3{YEAR_DASH}6|5\+|3\+|4\+)\s*years?\b"
            ))
            .unwrap(),
            ExperienceLevel::MidLevel,
        ),
        (
            Regex::new(&format!(
                r"\b(?:junior|entry[- ]?level|associate|graduate)\b|\b(?:0{YEAR_DASH}2|0{YEAR_DASH}3|1{YEAR_DASH}3)\s*years?\b"
            ))
            .unwrap(),
            ExperienceLevel::EntryLevel,
        ),
        (
            Regex::new(&format!(r"\b(?:7{YEAR_DASH}10|8\+|10\+)\s*years?\b")).unwrap(),
            ExperienceLevel::Senior,
        ),
    ];

    /// Domain, work arrangement, employment type, methodology and growth stage.
    static ref KEYWORD_RULES: Vec<Regex> = vec![
        Regex::new(r"\b(?:startup|enterprise|b2b|b2c|saas|fintech|healthcare|e-commerce|edtech|martech)\b").unwrap(),
        Regex::new(r"\b(?:remote|hybrid|onsite|on-site|in-office)\b").unwrap(),
        Regex::new(r"\b(?:full[- ]?time|part[- ]?time|contract|contractor|freelance)\b").unwrap(),
        Regex::new(r"\b(?:agile|scrum|kanban|waterfall)\b").unwrap(),
        Regex::new(r"\b(?:fast[- ]?paced|high[- ]?growth|early[- ]?stage|series [a-d])\b").unwrap(),
    ];

    static ref SENTENCE_SPLIT: Regex = Regex::new(r"[.•\n]").unwrap();
}

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

/// Parses a job description into a [`JobAnalysis`]. Empty input yields the default.
pub fn extract_keywords_from_job(job_description: &str) -> JobAnalysis {
    let original = truncate_chars(job_description, MAX_SCAN_CHARS);
    if original.trim().is_empty() {
        return JobAnalysis::default();
    }
    let text = original.to_lowercase();

    let found = taxonomy::find_skills(&text);
    let (required_skills, preferred_skills) = classify_skills(&text, &found);
    let experience_level = detect_level(&text);
    let key_responsibilities = extract_responsibilities(original);
    let keywords = extract_keywords(&text);

    debug!(
        required = required_skills.len(),
        preferred = preferred_skills.len(),
        level = %experience_level,
        "Analyzed job description"
    );

    JobAnalysis {
        required_skills,
        preferred_skills,
        experience_level,
        key_responsibilities,
        keywords,
    }
}

/// Byte range of the "required" and "preferred" spans of lower-cased `text`.
fn requirement_spans(text: &str) -> (Option<&str>, Option<&str>) {
    let required = REQUIRED_MARKER.find(text).map(|m| {
        let end = PREFERRED_MARKER
            .find_at(text, m.end())
            .map(|p| p.start())
            .unwrap_or(text.len());
        &text[m.end()..end]
    });
    let preferred = PREFERRED_MARKER.find(text).map(|m| {
        let end = PREFERRED_END
            .find_at(text, m.end())
            .map(|p| p.start())
            .unwrap_or(text.len());
        &text[m.end()..end]
    });
    (required, preferred)
}

fn classify_skills(text: &str, found: &[&str]) -> (Vec<String>, Vec<String>) {
    let (required_span, preferred_span) = requirement_spans(text);

    let mut required: Vec<String> = match required_span {
        Some(span) => found
            .iter()
            .filter(|s| contains_whole_word(span, s))
            .map(|s| s.to_string())
            .collect(),
        None => Vec::new(),
    };
    let mut preferred: Vec<String> = match preferred_span {
        Some(span) => found
            .iter()
            .filter(|s| contains_whole_word(span, s) && !required.iter().any(|r| r == *s))
            .map(|s| s.to_string())
            .collect(),
        None => Vec::new(),
    };

    if required.is_empty() && preferred.is_empty() {
        required = found.iter().map(|s| s.to_string()).collect();
    }

    for skill in found {
        if !required.iter().any(|r| r == skill) && !preferred.iter().any(|p| p == skill) {
            preferred.push(skill.to_string());
        }
    }

    (
        dedup_case_insensitive(required),
        dedup_case_insensitive(preferred),
    )
}

fn detect_level(text: &str) -> ExperienceLevel {
    LEVEL_RULES
        .iter()
        .find(|(rule, _)| rule.is_match(text))
        .map(|(_, level)| *level)
        .unwrap_or_default()
}

fn extract_responsibilities(original: &str) -> Vec<String> {
    SENTENCE_SPLIT
        .split(original)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_RESPONSIBILITY_CHARS)
        .filter(|s| {
            let lower = s.to_lowercase();
            ACTION_VERBS.iter().any(|v| lower.contains(v))
        })
        .take(MAX_RESPONSIBILITIES)
        .map(str::to_string)
        .collect()
}

fn extract_keywords(text: &str) -> Vec<String> {
    let matches = KEYWORD_RULES
        .iter()
        .flat_map(|rule| rule.find_iter(text).map(|m| m.as_str().to_string()));
    dedup_case_insensitive(matches)
}
