//! Resume intelligence engine: parses plain-text resumes into structured records,
//! extracts requirements from job descriptions, scores resume/job fit and produces
//! tailoring suggestions.

pub mod config;
pub mod decode;
pub mod errors;
pub mod matching;
pub mod models;
pub mod parsing;
pub mod taxonomy;
pub mod text;

pub use decode::{extract_text, DocumentFormat, TextDecoder};
pub use errors::ResumeError;
pub use matching::{
    analyze_keyword_density, analyze_resume_for_job, analyze_resume_match,
    check_ats_compatibility, extract_keywords_from_job, generate_cover_letter,
    suggest_resume_tweaks, tailor_resume_for_job, AtsReport, CoverLetter, CoverLetterOptions,
    CoverLetterProfile, ExperienceLevel, JobAnalysis, KeywordDensityReport, Length, MatchResult,
    Priority, ResumeJobReport, TailoredResume, TailoredSuggestion, Tone,
};
pub use models::{ResumeEducation, ResumeExperience, ResumeProject, StructuredResume};
pub use parsing::{extract_years_of_experience, parse_resume_file, parse_resume_text};
pub use taxonomy::{related_skills, skill_category};
