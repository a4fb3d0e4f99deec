//! Tailoring Orchestrator: checks a parsed resume's fields against a job and
//! bundles the result into one report.
//!
//! The coverage score here is matched / total over required and preferred
//! skills together, unweighted. It intentionally differs from the weighted
//! score in `fit_scoring`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::fit_scoring::{flatten_resume, NEUTRAL_SCORE};
use crate::matching::impact::{
    find_weak_phrase, has_design_depth, has_impact_verb, has_seniority_signal, is_quantified,
};
use crate::matching::jd_parser::{extract_keywords_from_job, ExperienceLevel, JobAnalysis};
use crate::matching::suggestions::{Priority, TailoredSuggestion};
use crate::models::StructuredResume;
use crate::text::{contains_whole_word, round2};

const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredResume {
    pub resume: StructuredResume,
    /// At most ten, in check order.
    pub suggestions: Vec<TailoredSuggestion>,
    /// Job keywords (work arrangement, domain, methodology) the resume never mentions.
    pub keywords_to_add: Vec<String>,
    /// Job skills the resume already shows.
    pub skills_to_emphasize: Vec<String>,
    /// Job skills the resume lacks, required first.
    pub skills_to_add: Vec<String>,
    /// Unweighted skill coverage in [0, 1].
    pub match_score: f64,
}

/// Unweighted coverage: matched / total, neutral when the job lists no skills.
pub fn coverage_score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return NEUTRAL_SCORE;
    }
    round2(matched as f64 / total as f64)
}

/// Checks a parsed resume against a job description.
pub fn tailor_resume_for_job(resume: StructuredResume, job_description: &str) -> TailoredResume {
    let job = extract_keywords_from_job(job_description);
    tailor_for_job(resume, &job)
}

/// Same as [`tailor_resume_for_job`] for an already analyzed job.
pub fn tailor_for_job(resume: StructuredResume, job: &JobAnalysis) -> TailoredResume {
    let flat = flatten_resume(&resume);
    let full_text = match &resume.raw_text {
        Some(raw) => format!("{flat}\n{}", raw.to_lowercase()),
        None => flat.clone(),
    };

    let (skills_to_emphasize, skills_to_add): (Vec<String>, Vec<String>) = job
        .all_skills()
        .map(str::to_string)
        .partition(|skill| contains_whole_word(&flat, &skill.to_lowercase()));
    let total = skills_to_emphasize.len() + skills_to_add.len();
    let match_score = coverage_score(skills_to_emphasize.len(), total);

    let keywords_to_add: Vec<String> = job
        .keywords
        .iter()
        .filter(|k| !full_text.contains(k.as_str()))
        .cloned()
        .collect();

    let checks = ResumeChecks {
        resume: &resume,
        job,
        full_text: &full_text,
        skills_to_add: &skills_to_add,
        skills_to_emphasize: &skills_to_emphasize,
    };
    let mut suggestions = checks.run();
    suggestions.truncate(MAX_SUGGESTIONS);

    debug!(
        score = match_score,
        suggestions = suggestions.len(),
        "Tailored resume for job"
    );

    TailoredResume {
        resume,
        suggestions,
        keywords_to_add,
        skills_to_emphasize,
        skills_to_add,
        match_score,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field checks
// ────────────────────────────────────────────────────────────────────────────

struct ResumeChecks<'a> {
    resume: &'a StructuredResume,
    job: &'a JobAnalysis,
    full_text: &'a str,
    skills_to_add: &'a [String],
    skills_to_emphasize: &'a [String],
}

impl ResumeChecks<'_> {
    fn run(&self) -> Vec<TailoredSuggestion> {
        let mut out = Vec::new();
        self.summary(&mut out);
        self.missing_skills(&mut out);
        if self.resume.experience.is_empty() {
            out.push(TailoredSuggestion::new(
                "Experience",
                Priority::High,
                "Add a work experience section with your roles, dates and accomplishments",
                "No experience entries could be found",
            ));
        } else {
            self.bullets(&mut out);
            self.seniority(&mut out);
            self.depth_and_impact(&mut out);
        }
        self.skills_section(&mut out);
        self.remote(&mut out);
        self.projects(&mut out);
        out
    }

    fn summary(&self, out: &mut Vec<TailoredSuggestion>) {
        let Some(summary) = &self.resume.summary else {
            out.push(TailoredSuggestion::new(
                "Summary",
                Priority::High,
                "Add a professional summary that states your focus and strongest skills for this role",
                "The resume has no summary section",
            ));
            return;
        };
        let lower = summary.to_lowercase();
        let top_required: Vec<&str> = self
            .job
            .required_skills
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        if !top_required.is_empty() && !top_required.iter().any(|s| contains_whole_word(&lower, s)) {
            out.push(
                TailoredSuggestion::new(
                    "Summary",
                    Priority::Medium,
                    format!("Mention your experience with {} in the summary", top_required.join(", ")),
                    "The summary does not mention any of the job's top required skills",
                )
                .with_original(summary.clone()),
            );
        }
    }

    fn missing_skills(&self, out: &mut Vec<TailoredSuggestion>) {
        let required: Vec<&str> = self
            .skills_to_add
            .iter()
            .filter(|s| self.job.required_skills.contains(s))
            .map(String::as_str)
            .collect();
        if !required.is_empty() {
            out.push(TailoredSuggestion::new(
                "Skills",
                Priority::High,
                format!("Add these required skills if you have experience: {}", required.join(", ")),
                "Required skills missing from the resume",
            ));
        }
        let preferred: Vec<&str> = self
            .skills_to_add
            .iter()
            .filter(|s| self.job.preferred_skills.contains(s))
            .map(String::as_str)
            .collect();
        if !preferred.is_empty() {
            out.push(TailoredSuggestion::new(
                "Skills",
                Priority::Medium,
                format!("Consider adding these preferred skills: {}", preferred.join(", ")),
                "Preferred skills missing from the resume",
            ));
        }
    }

    /// Metric and weak-verb scans; each stops at its first hit across all entries.
    fn bullets(&self, out: &mut Vec<TailoredSuggestion>) {
        if let Some(job) = self
            .resume
            .experience
            .iter()
            .find(|e| !e.bullets.iter().any(|b| is_quantified(b)))
        {
            let mut suggestion = TailoredSuggestion::new(
                "Experience",
                Priority::High,
                format!("Quantify your impact at {} with numbers, percentages or scale", job.company),
                "None of this role's bullets carry a measurable result",
            );
            if let Some(first) = job.bullets.first() {
                suggestion = suggestion.with_original(first.clone());
            }
            out.push(suggestion);
        }

        if let Some((bullet, weak)) = self
            .resume
            .bullets()
            .find_map(|b| find_weak_phrase(b).map(|w| (b, w)))
        {
            out.push(
                TailoredSuggestion::new(
                    "Experience",
                    Priority::Medium,
                    format!("Replace '{weak}' with a strong action verb such as 'Led', 'Built' or 'Delivered'"),
                    format!("'{weak}' describes involvement rather than ownership"),
                )
                .with_original(bullet),
            );
        }
    }

    fn seniority(&self, out: &mut Vec<TailoredSuggestion>) {
        if self.job.experience_level != ExperienceLevel::Senior {
            return;
        }
        let titles_show_seniority = self
            .resume
            .experience
            .iter()
            .any(|e| has_seniority_signal(&e.title));
        if !titles_show_seniority {
            out.push(TailoredSuggestion::new(
                "Experience",
                Priority::High,
                "Emphasize leadership: teams led, projects owned, or architectural decisions made",
                "The role is senior but no title shows lead, senior or architect responsibility",
            ));
        }
        if !self.full_text.contains("mentor") {
            out.push(TailoredSuggestion::new(
                "Experience",
                Priority::Medium,
                "Add mentoring experience (junior developers coached, interns supervised, etc.)",
                "Senior roles usually expect mentoring",
            ));
        }
    }

    fn depth_and_impact(&self, out: &mut Vec<TailoredSuggestion>) {
        let bullets: Vec<&str> = self.resume.bullets().collect();
        let joined = bullets.join("\n");
        let needs_depth = matches!(
            self.job.experience_level,
            ExperienceLevel::MidLevel | ExperienceLevel::Senior
        );
        if needs_depth && !has_design_depth(&joined) {
            out.push(TailoredSuggestion::new(
                "Experience",
                Priority::Medium,
                "Include examples of system design, architecture decisions, or scaling challenges",
                "Mid-level and senior roles look for design and scaling work",
            ));
        }
        if !has_impact_verb(&joined) {
            out.push(TailoredSuggestion::new(
                "Experience",
                Priority::Medium,
                "Use impact-focused language: 'Improved X by Y%', 'Reduced Z resulting in...'",
                "No bullet uses an outcome verb such as increased, reduced or improved",
            ));
        }
    }

    fn skills_section(&self, out: &mut Vec<TailoredSuggestion>) {
        let listed: Vec<String> = self.resume.skills.iter().map(|s| s.to_lowercase()).collect();
        let unlisted: Vec<&str> = self
            .skills_to_emphasize
            .iter()
            .filter(|s| !listed.contains(&s.to_lowercase()))
            .map(String::as_str)
            .collect();
        if !unlisted.is_empty() {
            out.push(TailoredSuggestion::new(
                "Skills",
                Priority::Low,
                format!("List {} in your skills section", unlisted.join(", ")),
                "These job skills appear in your experience but not in the skills list",
            ));
        }
    }

    fn remote(&self, out: &mut Vec<TailoredSuggestion>) {
        let wants_remote = self.job.keywords.iter().any(|k| k == "remote");
        if wants_remote && !self.full_text.contains("remote") {
            out.push(TailoredSuggestion::new(
                "Summary",
                Priority::Low,
                "Mention remote work experience and self-management skills if applicable",
                "The job is remote",
            ));
        }
    }

    fn projects(&self, out: &mut Vec<TailoredSuggestion>) {
        if self.job.experience_level == ExperienceLevel::EntryLevel && self.resume.projects.is_empty() {
            out.push(TailoredSuggestion::new(
                "Projects",
                Priority::Medium,
                "Add personal or academic projects that use the job's technologies",
                "Entry-level roles weigh projects heavily when work history is short",
            ));
        }
    }
}
