use serde::{Deserialize, Serialize};

/// Normalized record of the sections recovered from a resume.
///
/// Built once per parse call and never mutated by the engine afterwards.
/// Persistence layers store it as JSON; the engine only deals with the in-memory value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredResume {
    pub summary: Option<String>,
    pub experience: Vec<ResumeExperience>,
    pub education: Vec<ResumeEducation>,
    pub skills: Vec<String>,
    pub projects: Vec<ResumeProject>,
    pub certifications: Vec<String>,
    pub raw_text: Option<String>,
}

impl StructuredResume {
    /// True when nothing beyond the raw text could be recovered.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.certifications.is_empty()
    }

    /// Iterates every experience bullet in document order.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|e| e.bullets.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeExperience {
    pub company: String,
    pub title: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    /// At most 10 bullets, markers stripped.
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeEducation {
    pub school: String,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub year: Option<String>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProject {
    pub name: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub url: Option<String>,
}
