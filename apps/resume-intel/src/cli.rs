use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use resume_intel::{
    analyze_keyword_density, analyze_resume_for_job, analyze_resume_match,
    check_ats_compatibility, extract_keywords_from_job, extract_text,
    extract_years_of_experience, generate_cover_letter, parse_resume_text, suggest_resume_tweaks,
    tailor_resume_for_job, CoverLetter, CoverLetterOptions, CoverLetterProfile, Length, Tone,
};

#[derive(Parser)]
#[command(name = "resume-intel")]
#[command(about = "Parse resumes, analyze job descriptions and score the fit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume into structured JSON
    Parse {
        /// Resume file (.txt, .pdf, .docx, .doc)
        resume: PathBuf,
    },

    /// Extract skills, level and keywords from a job description
    AnalyzeJob {
        /// Job description text file
        job: PathBuf,
    },

    /// Score a resume against a job description
    Match { resume: PathBuf, job: PathBuf },

    /// Suggest resume tweaks for a job description
    Tweaks { resume: PathBuf, job: PathBuf },

    /// Tailor a parsed resume to a job description
    Tailor { resume: PathBuf, job: PathBuf },

    /// Check a resume for ATS compatibility
    Ats { resume: PathBuf },

    /// Compare job keyword frequency with the resume
    Density { resume: PathBuf, job: PathBuf },

    /// Job analysis, match score and tweaks in one report
    Report { resume: PathBuf, job: PathBuf },

    /// Estimate years of experience from a resume
    Years { resume: PathBuf },

    /// Draft a cover letter from a profile and a job description
    CoverLetter {
        /// Candidate profile JSON (name, current_title, skills, years_experience, ...)
        profile: PathBuf,

        /// Job description text file
        job: PathBuf,

        /// Company name
        #[arg(short, long)]
        company: String,

        /// Role title
        #[arg(short, long)]
        role: String,

        /// Tone (professional/conversational/enthusiastic/formal)
        #[arg(short, long, default_value = "professional")]
        tone: String,

        /// Length (short/medium/detailed)
        #[arg(short, long, default_value = "medium")]
        length: String,

        /// Highlight to list; repeat for several
        #[arg(short, long = "point")]
        points: Vec<String>,
    },
}

#[derive(Serialize)]
struct YearsOutput {
    years_of_experience: Option<u32>,
}

fn read_resume(path: &Path) -> Result<String> {
    let text = extract_text(path)
        .with_context(|| format!("Failed to read resume '{}'", path.display()))?;
    debug!(path = %path.display(), chars = text.chars().count(), "Resume text extracted");
    Ok(text)
}

fn read_job(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job description '{}'", path.display()))
}

fn read_profile(path: &Path) -> Result<CoverLetterProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Profile '{}' is not valid profile JSON", path.display()))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("Failed to serialize output")
}

/// Runs one subcommand and returns its JSON output.
pub fn execute(command: &Commands) -> Result<Value> {
    match command {
        Commands::Parse { resume } => to_json(&parse_resume_text(&read_resume(resume)?)),
        Commands::AnalyzeJob { job } => to_json(&extract_keywords_from_job(&read_job(job)?)),
        Commands::Match { resume, job } => {
            to_json(&analyze_resume_match(&read_resume(resume)?, &read_job(job)?))
        }
        Commands::Tweaks { resume, job } => {
            to_json(&suggest_resume_tweaks(&read_resume(resume)?, &read_job(job)?))
        }
        Commands::Tailor { resume, job } => {
            let parsed = parse_resume_text(&read_resume(resume)?);
            to_json(&tailor_resume_for_job(parsed, &read_job(job)?))
        }
        Commands::Ats { resume } => to_json(&check_ats_compatibility(&read_resume(resume)?)),
        Commands::Density { resume, job } => {
            to_json(&analyze_keyword_density(&read_resume(resume)?, &read_job(job)?))
        }
        Commands::Report { resume, job } => {
            to_json(&analyze_resume_for_job(&read_resume(resume)?, &read_job(job)?))
        }
        Commands::Years { resume } => to_json(&YearsOutput {
            years_of_experience: extract_years_of_experience(&read_resume(resume)?),
        }),
        Commands::CoverLetter {
            profile,
            job,
            company,
            role,
            tone,
            length,
            points,
        } => {
            let options = CoverLetterOptions {
                company_name: company.clone(),
                role: role.clone(),
                custom_points: points.clone(),
                tone: Tone::from_name(tone),
                length: Length::from_name(length),
            };
            let letter = generate_cover_letter(&read_profile(profile)?, &read_job(job)?, &options);
            to_json(&CoverLetter::new(letter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_parses_two_path_subcommand() {
        let cli = Cli::try_parse_from(["resume-intel", "match", "cv.txt", "job.txt"]).unwrap();
        match cli.command {
            Commands::Match { resume, job } => {
                assert_eq!(resume, PathBuf::from("cv.txt"));
                assert_eq!(job, PathBuf::from("job.txt"));
            }
            _ => panic!("expected match subcommand"),
        }
    }

    #[test]
    fn test_cli_kebab_case_subcommand() {
        let cli = Cli::try_parse_from(["resume-intel", "analyze-job", "job.txt"]).unwrap();
        assert!(matches!(cli.command, Commands::AnalyzeJob { .. }));
        assert!(Cli::try_parse_from(["resume-intel", "match", "cv.txt"]).is_err());
    }

    #[test]
    fn test_execute_years() {
        let resume = temp_file(".txt", "Over 6+ years of experience building APIs");
        let output = execute(&Commands::Years {
            resume: resume.path().to_path_buf(),
        })
        .unwrap();
        assert_eq!(output["years_of_experience"], 6);
    }

    #[test]
    fn test_execute_match_reads_both_files() {
        let resume = temp_file(".txt", "Skills\nPython, AWS");
        let job = temp_file(".txt", "Requirements: Python, AWS.");
        let output = execute(&Commands::Match {
            resume: resume.path().to_path_buf(),
            job: job.path().to_path_buf(),
        })
        .unwrap();
        assert_eq!(output["match_score"], 0.85);
    }

    #[test]
    fn test_cli_cover_letter_options() {
        let cli = Cli::try_parse_from([
            "resume-intel", "cover-letter", "me.json", "job.txt", "--company", "Globex", "--role",
            "SRE", "--tone", "formal", "--point", "Ran on-call", "--point", "Cut costs",
        ])
        .unwrap();
        match cli.command {
            Commands::CoverLetter { tone, length, points, .. } => {
                assert_eq!(tone, "formal");
                assert_eq!(length, "medium");
                assert_eq!(points, vec!["Ran on-call", "Cut costs"]);
            }
            _ => panic!("expected cover-letter subcommand"),
        }
    }

    #[test]
    fn test_execute_cover_letter() {
        let profile = temp_file(".json", r#"{"name": "Jane Doe", "skills": ["Python"]}"#);
        let job = temp_file(".txt", "Requirements: Python, AWS.");
        let output = execute(&Commands::CoverLetter {
            profile: profile.path().to_path_buf(),
            job: job.path().to_path_buf(),
            company: "Globex".to_string(),
            role: "SRE".to_string(),
            tone: "pirate".to_string(),
            length: "short".to_string(),
            points: Vec::new(),
        })
        .unwrap();
        let text = output["cover_letter"].as_str().unwrap();
        assert!(text.contains("I am writing to express my interest in the SRE position at Globex."));
        assert!(text.contains("My experience with python aligns"));
        assert!(text.ends_with("Best regards,\nJane Doe"));
        assert!(output["word_count"].as_u64().unwrap() > 20);
    }

    #[test]
    fn test_execute_rejects_unsupported_resume() {
        let resume = temp_file(".rtf", "Skills\nPython");
        let err = execute(&Commands::Parse {
            resume: resume.path().to_path_buf(),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("Unsupported file format"));
    }
}
