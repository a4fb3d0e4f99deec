//! Combined job report: job analysis, match score and tweaks from one pass over the job text.

use serde::{Deserialize, Serialize};

use crate::matching::fit_scoring::{analyze_resume_match, score_against_job, MatchResult};
use crate::matching::jd_parser::{extract_keywords_from_job, JobAnalysis};
use crate::matching::suggestions::{suggest_for_job, TailoredSuggestion};
use crate::parsing::parse_resume_text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeJobReport {
    pub job_analysis: JobAnalysis,
    #[serde(rename = "match")]
    pub match_result: MatchResult,
    pub suggestions: Vec<TailoredSuggestion>,
}

/// Runs job analysis, match scoring and the tweak rules for one resume/job pair.
pub fn analyze_resume_for_job(resume_text: &str, job_description: &str) -> ResumeJobReport {
    let job_analysis = extract_keywords_from_job(job_description);

    let match_result = if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        analyze_resume_match(resume_text, job_description)
    } else {
        let resume = parse_resume_text(resume_text);
        score_against_job(&resume, resume_text, &job_analysis)
    };
    let suggestions = suggest_for_job(resume_text, &job_analysis);

    ResumeJobReport {
        job_analysis,
        match_result,
        suggestions,
    }
}
