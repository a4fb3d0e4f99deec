pub mod ats;
pub mod cover_letter;
pub mod fit_scoring;
pub mod impact;
pub mod jd_parser;
pub mod keyword_density;
pub mod report;
pub mod suggestions;
pub mod tailoring;

pub use ats::{check_ats_compatibility, AtsReport};
pub use cover_letter::{
    generate_cover_letter, CoverLetter, CoverLetterOptions, CoverLetterProfile, Length, Tone,
};
pub use fit_scoring::{analyze_resume_match, MatchResult};
pub use jd_parser::{extract_keywords_from_job, ExperienceLevel, JobAnalysis};
pub use keyword_density::{analyze_keyword_density, KeywordDensityReport};
pub use report::{analyze_resume_for_job, ResumeJobReport};
pub use suggestions::{suggest_resume_tweaks, Priority, TailoredSuggestion};
pub use tailoring::{tailor_resume_for_job, TailoredResume};
