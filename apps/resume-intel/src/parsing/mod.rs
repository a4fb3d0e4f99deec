//! Resume text parsing: section segmentation, entry splitting and per-section extraction.

pub mod dates;
pub mod education;
pub mod experience;
pub mod projects;
pub mod sections;
pub mod skills;
pub mod splitter;
pub mod tenure;

use std::path::Path;

use tracing::debug;

use crate::decode;
use crate::errors::ResumeError;
use crate::models::StructuredResume;

pub use dates::{parse_date_range, DateRange, PRESENT};
pub use sections::{segment_sections, SectionKind, Sections};
pub use tenure::extract_years_of_experience;

use education::parse_education_entry;
use experience::parse_experience_entry;
use projects::parse_project_entry;
use skills::{extract_certifications, extract_skills};
use splitter::{split_entries, split_projects, INSTITUTION_KEYWORDS, TITLE_KEYWORDS};

/// Recovers a [`StructuredResume`] from unformatted text.
///
/// Never fails: text without recognizable headers yields empty sections, with
/// `raw_text` always set to the input.
pub fn parse_resume_text(text: &str) -> StructuredResume {
    let sections = segment_sections(text);

    let summary_source = sections.lines(SectionKind::Summary);
    let summary_lines: Vec<&str> = summary_source
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    let summary = (!summary_lines.is_empty()).then(|| summary_lines.join(" "));

    // Each header occurrence is split on its own so entries never cross sections.
    let experience: Vec<_> = sections
        .groups(SectionKind::Experience)
        .iter()
        .flat_map(|group| split_entries(group, TITLE_KEYWORDS))
        .filter_map(|entry| parse_experience_entry(&entry))
        .collect();

    let education: Vec<_> = sections
        .groups(SectionKind::Education)
        .iter()
        .flat_map(|group| split_entries(group, INSTITUTION_KEYWORDS))
        .filter_map(|entry| parse_education_entry(&entry))
        .collect();

    let projects: Vec<_> = sections
        .groups(SectionKind::Projects)
        .iter()
        .flat_map(|group| split_projects(group))
        .filter_map(|entry| parse_project_entry(&entry))
        .collect();

    let skills = extract_skills(&sections.lines(SectionKind::Skills), text);
    let certifications = extract_certifications(&sections.lines(SectionKind::Certifications));

    debug!(
        experience = experience.len(),
        education = education.len(),
        projects = projects.len(),
        skills = skills.len(),
        "Parsed resume text"
    );

    StructuredResume {
        summary,
        experience,
        education,
        skills,
        projects,
        certifications,
        raw_text: Some(text.to_string()),
    }
}

/// Decodes a `.txt`, `.pdf`, `.docx` or `.doc` file and parses its text.
pub fn parse_resume_file(path: impl AsRef<Path>) -> Result<StructuredResume, ResumeError> {
    let text = decode::extract_text(path.as_ref())?;
    Ok(parse_resume_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe
jane@example.com | (555) 123-4567

Professional Summary
Backend engineer focused on distributed systems.
Eight years shipping Python and Go services.

Experience
Senior Software Engineer at Acme Corp
San Francisco, CA
Jan 2020 - Present
• Led team of 5 engineers building the billing platform
• Reduced p99 latency by 40% across 12 services

Software Engineer | Globex
2016 - 2019
- Built data pipelines on Kafka and PostgreSQL

Education
Stanford University
B.S. in Computer Science, 2016
GPA: 3.8

Skills
Languages: Python, Go, SQL
Cloud: AWS, Kubernetes, Docker

Projects
JobTracker - A CRM for job seekers
Technologies: Rust, React
https://github.com/jane/jobtracker

Certifications
• AWS Certified Solutions Architect
";

    #[test]
    fn test_parse_full_resume() {
        let resume = parse_resume_text(SAMPLE);

        assert_eq!(
            resume.summary.as_deref(),
            Some("Backend engineer focused on distributed systems. Eight years shipping Python and Go services.")
        );

        assert_eq!(resume.experience.len(), 2);
        let first = &resume.experience[0];
        assert_eq!(first.title, "Senior Software Engineer");
        assert_eq!(first.company, "Acme Corp");
        assert_eq!(first.location.as_deref(), Some("San Francisco, CA"));
        assert_eq!(first.start_date.as_deref(), Some("Jan 2020"));
        assert_eq!(first.end_date.as_deref(), Some("Present"));
        assert_eq!(first.bullets.len(), 2);
        let second = &resume.experience[1];
        assert_eq!(second.title, "Software Engineer");
        assert_eq!(second.company, "Globex");
        assert_eq!(second.start_date.as_deref(), Some("2016"));

        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].school, "Stanford University");
        assert_eq!(resume.education[0].gpa, Some(3.8));

        assert!(resume.skills.contains(&"Python".to_string()));
        assert!(resume.skills.contains(&"Kubernetes".to_string()));
        assert!(resume.skills.contains(&"kafka".to_string()), "recovered from experience bullets");

        assert_eq!(resume.projects.len(), 1);
        assert_eq!(resume.projects[0].name, "JobTracker");
        assert_eq!(resume.projects[0].technologies, vec!["Rust", "React"]);

        assert_eq!(resume.certifications, vec!["AWS Certified Solutions Architect"]);
        assert_eq!(resume.raw_text.as_deref(), Some(SAMPLE));
    }

    #[test]
    fn test_no_headers_yields_empty_sections() {
        let text = "Just some words about myself.\nNothing structured here.";
        let resume = parse_resume_text(text);
        assert!(resume.experience.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.projects.is_empty());
        assert!(resume.certifications.is_empty());
        assert_eq!(resume.summary, None);
        assert_eq!(resume.raw_text.as_deref(), Some(text));
    }

    #[test]
    fn test_empty_and_adversarial_text_do_not_panic() {
        for text in ["", "\n\n\n", "•\n-\n*", "Experience\n\n\n", "Education:\n2019 -", "ñ—é\u{200b}"] {
            let resume = parse_resume_text(text);
            assert_eq!(resume.raw_text.as_deref(), Some(text));
        }
    }

    #[test]
    fn test_reparse_of_raw_text_is_identical() {
        let first = parse_resume_text(SAMPLE);
        let raw = first.raw_text.clone().unwrap();
        assert_eq!(parse_resume_text(&raw), first);
    }

    #[test]
    fn test_single_job_under_experience_header() {
        let resume = parse_resume_text(
            "Experience\nSenior Software Engineer at Acme Corp\nJan 2020 - Present\n• Led team of 5 engineers",
        );
        assert_eq!(resume.experience.len(), 1);
        let job = &resume.experience[0];
        assert_eq!(job.title, "Senior Software Engineer");
        assert_eq!(job.company, "Acme Corp");
        assert_eq!(job.start_date.as_deref(), Some("Jan 2020"));
        assert_eq!(job.end_date.as_deref(), Some("Present"));
        assert_eq!(job.bullets, vec!["Led team of 5 engineers"]);
    }

    #[test]
    fn test_reopened_experience_without_title_keyword_is_its_own_entry() {
        let resume = parse_resume_text(
            "Experience\nEngineer at Alpha\n• Shipped the billing platform end to end\n\nEducation\nMIT\n\nExperience\nAcme Corp\n• Built the Acme checkout service",
        );
        assert_eq!(resume.experience.len(), 2);
        assert_eq!(resume.experience[0].company, "Alpha");
        assert_eq!(
            resume.experience[0].bullets,
            vec!["Shipped the billing platform end to end"]
        );
        assert_eq!(
            resume.experience[1].bullets,
            vec!["Built the Acme checkout service"]
        );
    }

    #[test]
    fn test_reopened_projects_with_lowercase_title_is_its_own_project() {
        let resume = parse_resume_text(
            "Projects\nJobTracker\nTracks job applications\n\nSkills\nRust\n\nProjects\nweather bot for slack",
        );
        assert_eq!(resume.projects.len(), 2);
        assert_eq!(resume.projects[0].name, "JobTracker");
        assert_eq!(
            resume.projects[0].description.as_deref(),
            Some("Tracks job applications")
        );
        assert_eq!(resume.projects[1].name, "weather bot for slack");
    }

    #[test]
    fn test_parse_resume_file_reports_missing_path() {
        let err = parse_resume_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, ResumeError::FileNotFound(_)));
    }
}
