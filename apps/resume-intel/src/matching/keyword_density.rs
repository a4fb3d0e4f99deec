//! Keyword density: how many of a job posting's most frequent terms the resume uses.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

const TOP_KEYWORDS: usize = 20;
const MIN_KEYWORD_CHARS: usize = 3;
const LISTED_MISSING: usize = 5;

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "need",
    "our", "your", "their", "this", "that", "these", "those", "it", "we", "you", "they", "he",
    "she", "who", "which", "what", "where", "when", "why", "how", "all", "each", "every",
    "both", "few", "more", "most", "other", "some", "such", "no", "not", "only", "own", "same",
    "than", "too", "very", "just", "also", "work", "ability", "experience",
];

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b[a-z]+\b").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensityReport {
    /// Up to 20 most frequent job terms, most frequent first.
    pub job_keywords: Vec<String>,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Percentage of `job_keywords` found, one decimal.
    pub density_score: f64,
    pub suggestions: Vec<String>,
}

/// Most frequent non-stop-word terms of the job text. Ties keep first-seen order.
pub fn top_job_keywords(job_description: &str) -> Vec<String> {
    let lower = job_description.to_lowercase();
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for word in WORD.find_iter(&lower).map(|m| m.as_str()) {
        if word.len() < MIN_KEYWORD_CHARS || STOP_WORDS.contains(&word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Compares the job's top terms with the resume text.
pub fn analyze_keyword_density(resume_text: &str, job_description: &str) -> KeywordDensityReport {
    let resume_lower = resume_text.to_lowercase();
    let job_keywords = top_job_keywords(job_description);

    let (found_keywords, missing_keywords): (Vec<String>, Vec<String>) = job_keywords
        .iter()
        .cloned()
        .partition(|k| resume_lower.contains(k.as_str()));

    let density_score = if job_keywords.is_empty() {
        0.0
    } else {
        let pct = found_keywords.len() as f64 / job_keywords.len() as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    };

    let mut suggestions = Vec::new();
    if density_score < 50.0 {
        suggestions.push(
            "Your resume may not pass ATS keyword filters - add more job-specific terms".to_string(),
        );
    }
    if !missing_keywords.is_empty() {
        let listed: Vec<&str> = missing_keywords
            .iter()
            .take(LISTED_MISSING)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider adding these missing keywords: {}",
            listed.join(", ")
        ));
    }
    if density_score >= 80.0 {
        suggestions
            .push("Good keyword coverage! Focus on showcasing impact and achievements".to_string());
    }

    KeywordDensityReport {
        job_keywords,
        found_keywords,
        missing_keywords,
        density_score,
        suggestions,
    }
}
