//! Suggestion Generator: ordered, independent checks over raw resume text.
//!
//! Rules run in a fixed order and their output is never re-sorted; the list
//! is cut at six.

use serde::{Deserialize, Serialize};

use crate::matching::fit_scoring::score_against_job;
use crate::matching::impact::{
    find_weak_phrase, has_design_depth, has_impact_verb, has_seniority_signal, is_quantified,
};
use crate::matching::jd_parser::{extract_keywords_from_job, ExperienceLevel, JobAnalysis};
use crate::parsing::parse_resume_text;

const MAX_TWEAKS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A prioritized, section-tagged recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredSuggestion {
    pub section: String,
    /// The resume text the suggestion refers to, when it points at one line.
    pub original: Option<String>,
    pub suggestion: String,
    pub priority: Priority,
    pub reason: String,
}

impl TailoredSuggestion {
    pub fn new(
        section: &str,
        priority: Priority,
        suggestion: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            section: section.to_string(),
            original: None,
            suggestion: suggestion.into(),
            priority,
            reason: reason.into(),
        }
    }

    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = Some(original.into());
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

struct TweakContext<'a> {
    lower: String,
    job: &'a JobAnalysis,
    missing: &'a [String],
}

impl TweakContext<'_> {
    fn missing_from(&self, pool: &[String], limit: usize) -> Vec<&str> {
        self.missing
            .iter()
            .filter(|s| pool.contains(s))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

type TweakRule = fn(&TweakContext<'_>) -> Vec<TailoredSuggestion>;

const TWEAK_RULES: &[TweakRule] = &[
    missing_required_skills,
    missing_preferred_skills,
    missing_metrics,
    weak_phrasing,
    senior_signals,
    remote_work,
    design_depth,
    impact_language,
];

fn missing_required_skills(ctx: &TweakContext<'_>) -> Vec<TailoredSuggestion> {
    let missing = ctx.missing_from(&ctx.job.required_skills, 4);
    if missing.is_empty() {
        return Vec::new();
    }
    vec![TailoredSuggestion::new(
        "Skills",
        Priority::High,
        format!("Add these required skills if you have experience: {}", missing.join(", ")),
        "The job lists these as requirements and the resume does not mention them",
    )]
}

fn missing_preferred_skills(ctx: &TweakContext<'_>) -> Vec<TailoredSuggestion> {
    let missing = ctx.missing_from(&ctx.job.preferred_skills, 3);
    if missing.is_empty() {
        return Vec::new();
    }
    vec![TailoredSuggestion::new(
        "Skills",
        Priority::Medium,
        format!("Consider adding these preferred skills: {}", missing.join(", ")),
        "Preferred skills set candidates apart when requirements are met",
    )]
}

fn missing_metrics(ctx: &TweakContext<'_>) -> Vec<TailoredSuggestion> {
    if is_quantified(&ctx.lower) {
        return Vec::new();
    }
    vec![TailoredSuggestion::new(
        "Experience",
        Priority::High,
        "Add metrics and numbers to quantify your achievements (e.g., 'Reduced load time by 50%', 'Served 1M users')",
        "No percentages, multipliers, dollar amounts or user counts were found",
    )]
}

fn weak_phrasing(ctx: &TweakContext<'_>) -> Vec<TailoredSuggestion> {
    let Some(weak) = find_weak_phrase(&ctx.lower) else {
        return Vec::new();
    };
    vec![TailoredSuggestion::new(
        "Experience",
        Priority::Medium,
        format!(
            "Replace '{weak}' with stronger action verbs like 'Led', 'Developed', 'Implemented', 'Architected', 'Spearheaded'"
        ),
        format!("'{weak}' describes involvement rather than ownership"),
    )]
}

fn senior_signals(ctx: &TweakContext<'_>) -> Vec<TailoredSuggestion> {
    if ctx.job.experience_level != ExperienceLevel::Senior {
        return Vec::new();
    }
    let mut out = Vec::new();
    if !has_seniority_signal(&ctx.lower) {
        out.push(TailoredSuggestion::new(
            "Summary",
            Priority::High,
            "Emphasize leadership experience - mention teams led, projects owned, or architectural decisions made",
            "The role is senior but the resume shows no lead, senior or architect experience",
        ));
    }
    if !ctx.lower.contains("mentor") {
        out.push(TailoredSuggestion::new(
            "Experience",
            Priority::Medium,
            "Add mentoring experience (junior developers coached, interns supervised, etc.)",
            "Senior roles usually expect mentoring",
        ));
    }
    out
}

fn remote_work(ctx: &TweakContext<'_>) -> Vec<TailoredSuggestion> {
    let wants_remote = ctx.job.keywords.iter().any(|k| k == "remote");
    if !wants_remote || ctx.lower.contains("remote") {
        return Vec::new();
    }
    vec![TailoredSuggestion::new(
        "Summary",
        Priority::Low,
        "Mention remote work experience and self-management skills if applicable",
        "The job is remote",
    )]
}

fn design_depth(ctx: &TweakContext<'_>) -> Vec<TailoredSuggestion> {
    let needs_depth = matches!(
        ctx.job.experience_level,
        ExperienceLevel::MidLevel | ExperienceLevel::Senior
    );
    if !needs_depth || has_design_depth(&ctx.lower) {
        return Vec::new();
    }
    vec![TailoredSuggestion::new(
        "Experience",
        Priority::Medium,
        "Include examples of system design, architecture decisions, or scaling challenges you've tackled",
        "Mid-level and senior roles look for design and scaling work",
    )]
}

fn impact_language(ctx: &TweakContext<'_>) -> Vec<TailoredSuggestion> {
    if has_impact_verb(&ctx.lower) {
        return Vec::new();
    }
    vec![TailoredSuggestion::new(
        "Experience",
        Priority::Medium,
        "Use impact-focused language: 'Improved X by Y%', 'Reduced Z resulting in...'",
        "No outcome verbs such as increased, reduced or improved were found",
    )]
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Suggests up to six changes that would bring the resume closer to the job.
pub fn suggest_resume_tweaks(resume_text: &str, job_description: &str) -> Vec<TailoredSuggestion> {
    let job = extract_keywords_from_job(job_description);
    suggest_for_job(resume_text, &job)
}

/// Same as [`suggest_resume_tweaks`] for an already analyzed job.
pub fn suggest_for_job(resume_text: &str, job: &JobAnalysis) -> Vec<TailoredSuggestion> {
    let missing = if resume_text.trim().is_empty() {
        Vec::new()
    } else {
        let resume = parse_resume_text(resume_text);
        score_against_job(&resume, resume_text, job).missing_skills
    };

    let ctx = TweakContext {
        lower: resume_text.to_lowercase(),
        job,
        missing: &missing,
    };

    let mut suggestions: Vec<TailoredSuggestion> =
        TWEAK_RULES.iter().flat_map(|rule| rule(&ctx)).collect();
    suggestions.truncate(MAX_TWEAKS);
    suggestions
}
