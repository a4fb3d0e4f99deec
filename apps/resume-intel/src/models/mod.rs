pub mod resume;

pub use resume::{ResumeEducation, ResumeExperience, ResumeProject, StructuredResume};
