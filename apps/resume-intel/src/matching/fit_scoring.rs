//! Match Scorer: resume-vs-job skill overlap as a weighted score in [0, 1].
//!
//! Required skills carry 70% of the score and preferred skills 30%. A side
//! with no skills contributes a neutral 0.5; with no job skills at all the
//! score is 0.5. Tailoring uses its own unweighted coverage score
//! (see `tailoring`), and the two are kept separate.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::impact::has_seniority_signal;
use crate::matching::jd_parser::{extract_keywords_from_job, ExperienceLevel, JobAnalysis};
use crate::models::StructuredResume;
use crate::parsing::parse_resume_text;
use crate::text::{contains_whole_word, round2};

pub const REQUIRED_WEIGHT: f64 = 0.7;
pub const PREFERRED_WEIGHT: f64 = 0.3;
/// Score used for a side (or both sides) with no skills to match.
pub const NEUTRAL_SCORE: f64 = 0.5;

const MAX_SUGGESTIONS: usize = 5;
const MAX_REQUIRED_LISTED: usize = 4;
const MAX_PREFERRED_LISTED: usize = 3;

pub const MISSING_INPUT_SUGGESTION: &str = "Please provide both resume and job description";

lazy_static! {
    static ref MULTIPLIER: Regex = Regex::new(r"\d+x").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted score in [0, 1], two decimals.
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// At most five, most important first.
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Lower-cased summary, titles, companies, bullets and skills of a parsed resume.
pub fn flatten_resume(resume: &StructuredResume) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(summary) = &resume.summary {
        parts.push(summary);
    }
    for job in &resume.experience {
        parts.push(&job.title);
        parts.push(&job.company);
        parts.extend(job.bullets.iter().map(String::as_str));
    }
    parts.extend(resume.skills.iter().map(String::as_str));
    parts.join("\n").to_lowercase()
}

/// 0.7 × required coverage + 0.3 × preferred coverage, two decimals.
pub fn compute_weighted_score(
    required_matched: usize,
    required_total: usize,
    preferred_matched: usize,
    preferred_total: usize,
) -> f64 {
    if required_total + preferred_total == 0 {
        return NEUTRAL_SCORE;
    }
    let ratio = |matched: usize, total: usize| {
        if total == 0 {
            NEUTRAL_SCORE
        } else {
            matched as f64 / total as f64
        }
    };
    let score = REQUIRED_WEIGHT * ratio(required_matched, required_total)
        + PREFERRED_WEIGHT * ratio(preferred_matched, preferred_total);
    round2(score.clamp(0.0, 1.0))
}

/// Scores how well a resume covers a job description's skills.
///
/// Either input empty yields a zero score and a single prompt to supply both.
pub fn analyze_resume_match(resume_text: &str, job_description: &str) -> MatchResult {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return MatchResult {
            match_score: 0.0,
            matching_skills: Vec::new(),
            missing_skills: Vec::new(),
            suggestions: vec![MISSING_INPUT_SUGGESTION.to_string()],
        };
    }

    let job = extract_keywords_from_job(job_description);
    let resume = parse_resume_text(resume_text);
    score_against_job(&resume, resume_text, &job)
}

/// Scores an already parsed resume against an already analyzed job.
pub fn score_against_job(
    resume: &StructuredResume,
    resume_text: &str,
    job: &JobAnalysis,
) -> MatchResult {
    let flat = flatten_resume(resume);
    let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = job
        .all_skills()
        .map(str::to_string)
        .partition(|skill| contains_whole_word(&flat, &skill.to_lowercase()));

    let count_in = |skills: &[String], pool: &[String]| skills.iter().filter(|s| pool.contains(s)).count();
    let match_score = compute_weighted_score(
        count_in(&job.required_skills, &matching_skills),
        job.required_skills.len(),
        count_in(&job.preferred_skills, &matching_skills),
        job.preferred_skills.len(),
    );

    let suggestions = match_suggestions(resume_text, job, &missing_skills);
    debug!(
        score = match_score,
        matching = matching_skills.len(),
        missing = missing_skills.len(),
        "Scored resume against job"
    );

    MatchResult {
        match_score,
        matching_skills,
        missing_skills,
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Suggestions
// ────────────────────────────────────────────────────────────────────────────

fn match_suggestions(resume_text: &str, job: &JobAnalysis, missing: &[String]) -> Vec<String> {
    let lower = resume_text.to_lowercase();
    let mut suggestions = Vec::new();

    let required_missing: Vec<&str> = missing
        .iter()
        .filter(|s| job.required_skills.contains(s))
        .take(MAX_REQUIRED_LISTED)
        .map(String::as_str)
        .collect();
    if !required_missing.is_empty() {
        suggestions.push(format!(
            "Critical: Add experience with required skills: {}",
            required_missing.join(", ")
        ));
    }

    let preferred_missing: Vec<&str> = missing
        .iter()
        .filter(|s| job.preferred_skills.contains(s))
        .take(MAX_PREFERRED_LISTED)
        .map(String::as_str)
        .collect();
    if !preferred_missing.is_empty() {
        suggestions.push(format!("Consider adding: {}", preferred_missing.join(", ")));
    }

    if job.experience_level == ExperienceLevel::Senior {
        if !has_seniority_signal(&lower) {
            suggestions.push(
                "Highlight leadership experience and senior-level responsibilities".to_string(),
            );
        }
        if !lower.contains("mentor") {
            suggestions.push("Add mentoring experience if applicable".to_string());
        }
    }

    if !lower.contains("metrics") && !lower.contains('%') && !MULTIPLIER.is_match(&lower) {
        suggestions.push(
            "Add quantifiable achievements (e.g., 'Improved performance by 40%')".to_string(),
        );
    }

    for keyword in &job.keywords {
        if !lower.contains(keyword.as_str()) {
            suggestions.push(format!(
                "Consider mentioning '{keyword}' if relevant to your experience"
            ));
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
