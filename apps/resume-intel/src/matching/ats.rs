//! ATS compatibility check: a 0–100 score from fixed deductions for things
//! applicant tracking systems parse poorly.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

const STANDARD_SECTIONS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "work history",
];

const ATS_ACTION_VERBS: &[&str] = &[
    "managed",
    "developed",
    "created",
    "led",
    "implemented",
    "designed",
    "achieved",
    "improved",
    "built",
    "launched",
    "increased",
    "reduced",
];

const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1500;
const MIN_SECTIONS: usize = 2;
const MIN_ACTION_VERBS: usize = 3;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").unwrap();
    static ref PHONE: Regex = Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
    static ref ACHIEVEMENT: Regex =
        Regex::new(r"\d+%|\$\d+|\d+ years?|\d+ projects?|\d+ team").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    /// 100 minus deductions, floored at 0.
    pub score: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub format_warnings: Vec<String>,
}

/// Scores resume text for ATS friendliness.
pub fn check_ats_compatibility(resume_text: &str) -> AtsReport {
    let lower = resume_text.to_lowercase();
    let mut report = AtsReport::default();
    let mut score: i32 = 100;

    if !EMAIL.is_match(resume_text) {
        report.issues.push("No email address detected".to_string());
        score -= 10;
    }
    if !PHONE.is_match(resume_text) {
        report.issues.push("No phone number detected".to_string());
        score -= 5;
    }

    let sections = STANDARD_SECTIONS.iter().filter(|s| lower.contains(*s)).count();
    if sections < MIN_SECTIONS {
        report
            .issues
            .push("Missing standard section headings (Experience, Education, Skills)".to_string());
        report
            .recommendations
            .push("Add clear section headings like 'Experience', 'Education', 'Skills'".to_string());
        score -= 15;
    }

    let words = resume_text.split_whitespace().count();
    if words < MIN_WORDS {
        report
            .issues
            .push(format!("Resume seems too short ({words} words)"));
        report
            .recommendations
            .push("Add more detail to your experience and skills sections".to_string());
        score -= 10;
    } else if words > MAX_WORDS {
        report.format_warnings.push(format!(
            "Resume may be too long ({words} words) - consider condensing"
        ));
        score -= 5;
    }

    if !resume_text.is_ascii() {
        report
            .format_warnings
            .push("Contains special characters that may not parse correctly".to_string());
        score -= 5;
    }

    if resume_text.contains('|') || resume_text.contains("\t\t") {
        report
            .format_warnings
            .push("May contain tables or columns - ATS often struggles with these".to_string());
        report
            .recommendations
            .push("Use a single-column format for better ATS parsing".to_string());
        score -= 10;
    }

    let verbs = ATS_ACTION_VERBS.iter().filter(|v| lower.contains(*v)).count();
    if verbs < MIN_ACTION_VERBS {
        report
            .recommendations
            .push("Use more action verbs (managed, developed, achieved, etc.)".to_string());
        score -= 5;
    }

    if !ACHIEVEMENT.is_match(&lower) {
        report
            .recommendations
            .push("Add quantifiable achievements (percentages, dollar amounts, numbers)".to_string());
        score -= 5;
    }

    report.score = score.max(0) as u32;
    report
}
