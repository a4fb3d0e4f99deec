//! Cover letter drafting from a candidate profile and a job description.
//!
//! Deterministic template text: the tone picks the opener, skill intro,
//! closing and sign-off; the length decides how much supporting material
//! is kept.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::jd_parser::extract_keywords_from_job;
use crate::text::contains_whole_word;

const MAX_MATCHING_SKILLS: usize = 4;
const MAX_RESPONSIBILITIES: usize = 2;
const COMPANY_REASON_PLACEHOLDER: &str = "[specific reason - research the company]";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Conversational,
    Enthusiastic,
    Formal,
}

impl Tone {
    /// Case-insensitive lookup; unknown names fall back to `Professional`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "conversational" => Tone::Conversational,
            "enthusiastic" => Tone::Enthusiastic,
            "formal" => Tone::Formal,
            _ => Tone::Professional,
        }
    }

    fn opener(self, role: &str, company: &str) -> String {
        match self {
            Tone::Professional => {
                format!("I am writing to express my interest in the {role} position at {company}.")
            }
            Tone::Conversational => format!(
                "I was excited to see the {role} opening at {company} and knew I had to reach out."
            ),
            Tone::Enthusiastic => format!(
                "I'm thrilled to apply for the {role} position at {company}! This opportunity is exactly what I've been looking for."
            ),
            Tone::Formal => format!(
                "I respectfully submit my application for the {role} position currently available at {company}."
            ),
        }
    }

    fn skill_intro(self) -> &'static str {
        match self {
            Tone::Professional => "My experience with",
            Tone::Conversational => "I've worked extensively with",
            Tone::Enthusiastic => "I'm passionate about working with",
            Tone::Formal => "My technical proficiency includes",
        }
    }

    fn closing(self) -> &'static str {
        match self {
            Tone::Professional => "I would welcome the opportunity to discuss how my skills and experience can contribute to your team's success.",
            Tone::Conversational => "I'd love to chat more about how I could help your team. Let's connect!",
            Tone::Enthusiastic => "I'm genuinely excited about this opportunity and can't wait to discuss how I can make an impact at your company!",
            Tone::Formal => "I would be honored to discuss my qualifications further at your earliest convenience.",
        }
    }

    fn sign_off(self) -> &'static str {
        match self {
            Tone::Professional => "Best regards",
            Tone::Conversational => "Looking forward to connecting",
            Tone::Enthusiastic => "With enthusiasm",
            Tone::Formal => "Respectfully yours",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Detailed,
}

impl Length {
    /// Case-insensitive lookup; unknown names fall back to `Medium`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "short" => Length::Short,
            "detailed" => Length::Detailed,
            _ => Length::Medium,
        }
    }

    /// Custom highlight points kept at this length.
    pub fn max_points(self) -> usize {
        match self {
            Length::Short => 2,
            Length::Medium => 3,
            Length::Detailed => 4,
        }
    }
}

/// What the letter says about the candidate. Every field is optional in JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverLetterProfile {
    pub name: String,
    pub current_title: Option<String>,
    pub skills: Vec<String>,
    pub years_experience: Option<u32>,
    pub resume_summary: Option<String>,
    /// Used in place of the title/years introduction when present.
    pub elevator_pitch: Option<String>,
}

/// The job-specific part of a cover letter request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverLetterOptions {
    pub company_name: String,
    pub role: String,
    pub custom_points: Vec<String>,
    pub tone: Tone,
    pub length: Length,
}

/// A drafted letter with its size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetter {
    pub cover_letter: String,
    pub word_count: usize,
    pub character_count: usize,
}

impl CoverLetter {
    pub fn new(cover_letter: String) -> Self {
        Self {
            word_count: cover_letter.split_whitespace().count(),
            character_count: cover_letter.chars().count(),
            cover_letter,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Drafts a cover letter for `options.role` at `options.company_name`.
///
/// Required job skills the profile lists (up to four) go into the skills
/// paragraph. The detailed length also quotes up to two job responsibilities.
pub fn generate_cover_letter(
    profile: &CoverLetterProfile,
    job_description: &str,
    options: &CoverLetterOptions,
) -> String {
    let job = extract_keywords_from_job(job_description);
    let profile_skills = profile.skills.join("\n").to_lowercase();
    let matching_skills: Vec<&str> = job
        .required_skills
        .iter()
        .filter(|s| contains_whole_word(&profile_skills, &s.to_lowercase()))
        .take(MAX_MATCHING_SKILLS)
        .map(String::as_str)
        .collect();

    let tone = options.tone;
    let length = options.length;
    let company = options.company_name.as_str();

    let mut letter = format!(
        "Dear Hiring Manager,\n\n{} ",
        tone.opener(&options.role, company)
    );

    if let Some(pitch) = non_empty(&profile.elevator_pitch) {
        letter.push_str(pitch);
        letter.push(' ');
    } else if let Some(title) = non_empty(&profile.current_title) {
        letter.push_str(&format!("As a {title}"));
        if let Some(years) = profile.years_experience {
            letter.push_str(&format!(" with {years} years of experience"));
        }
        letter.push_str(", I am confident I can contribute meaningfully to your team. ");
    }
    letter.push_str("\n\n");

    if !matching_skills.is_empty() {
        letter.push_str(&format!(
            "{} {} aligns well with your requirements. ",
            tone.skill_intro(),
            matching_skills.join(", ")
        ));
    }
    if length != Length::Short {
        if let Some(summary) = non_empty(&profile.resume_summary) {
            letter.push_str(summary);
            letter.push(' ');
        }
    }
    letter.push_str("\n\n");

    if !options.custom_points.is_empty() {
        letter.push_str("Key highlights from my background:\n");
        for point in options.custom_points.iter().take(length.max_points()) {
            letter.push_str(&format!("- {point}\n"));
        }
        letter.push('\n');
    }

    if length == Length::Detailed && !job.key_responsibilities.is_empty() {
        let responsibilities: Vec<&str> = job
            .key_responsibilities
            .iter()
            .take(MAX_RESPONSIBILITIES)
            .map(String::as_str)
            .collect();
        letter.push_str(&format!(
            "I am particularly prepared to take on responsibilities such as {}. \n\n",
            responsibilities.join(" and ")
        ));
    }

    letter.push_str(&format!(
        "I am particularly drawn to {company} because of {COMPANY_REASON_PLACEHOLDER}. {}\n\n",
        tone.closing()
    ));
    let thanks = match length {
        Length::Short => "Thank you for your time.",
        _ => "Thank you for considering my application. I look forward to hearing from you.",
    };
    letter.push_str(&format!("{thanks}\n\n{},\n{}", tone.sign_off(), profile.name));

    debug!(
        tone = ?tone,
        length = ?length,
        matching = matching_skills.len(),
        "Drafted cover letter"
    );
    letter
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "Requirements: Python, Rust, Go, Kafka, Docker. You will build reliable data pipelines for customers. You will mentor engineers across the team.";

    fn profile() -> CoverLetterProfile {
        CoverLetterProfile {
            name: "Jane Doe".to_string(),
            current_title: Some("Backend Engineer".to_string()),
            skills: vec![
                "Python".to_string(),
                "Rust".to_string(),
                "Go".to_string(),
                "Kafka".to_string(),
                "Docker".to_string(),
            ],
            years_experience: Some(6),
            resume_summary: Some("I run event-driven systems in production.".to_string()),
            elevator_pitch: None,
        }
    }

    fn options(tone: Tone, length: Length, points: usize) -> CoverLetterOptions {
        CoverLetterOptions {
            company_name: "Globex".to_string(),
            role: "Platform Engineer".to_string(),
            custom_points: (1..=points).map(|i| format!("Highlight number {i}")).collect(),
            tone,
            length,
        }
    }

    #[test]
    fn test_professional_medium_letter() {
        let letter = generate_cover_letter(&profile(), JOB, &options(Tone::Professional, Length::Medium, 0));
        assert!(letter.starts_with(
            "Dear Hiring Manager,\n\nI am writing to express my interest in the Platform Engineer position at Globex."
        ));
        assert!(letter.contains(
            "As a Backend Engineer with 6 years of experience, I am confident I can contribute meaningfully to your team."
        ));
        assert!(letter.contains("I run event-driven systems in production."));
        assert!(letter.contains("I am particularly drawn to Globex because of [specific reason - research the company]."));
        assert!(letter.ends_with(
            "Thank you for considering my application. I look forward to hearing from you.\n\nBest regards,\nJane Doe"
        ));
        assert!(!letter.contains("Key highlights"));
        assert!(!letter.contains("responsibilities such as"));
    }

    #[test]
    fn test_each_tone_sets_opener_and_sign_off() {
        let cases = [
            (Tone::Professional, "I am writing to express", "My experience with", "Best regards,"),
            (Tone::Conversational, "I was excited to see", "I've worked extensively with", "Looking forward to connecting,"),
            (Tone::Enthusiastic, "I'm thrilled to apply", "I'm passionate about working with", "With enthusiasm,"),
            (Tone::Formal, "I respectfully submit", "My technical proficiency includes", "Respectfully yours,"),
        ];
        for (tone, opener, intro, sign_off) in cases {
            let letter = generate_cover_letter(&profile(), JOB, &options(tone, Length::Medium, 0));
            assert!(letter.contains(opener), "{tone:?}");
            assert!(letter.contains(intro), "{tone:?}");
            assert!(letter.contains(sign_off), "{tone:?}");
        }
    }

    #[test]
    fn test_unknown_names_fall_back() {
        assert_eq!(Tone::from_name("pirate"), Tone::Professional);
        assert_eq!(Tone::from_name(" Formal "), Tone::Formal);
        assert_eq!(Length::from_name("epic"), Length::Medium);
        assert_eq!(Length::from_name("SHORT"), Length::Short);
    }

    #[test]
    fn test_custom_points_capped_by_length() {
        for (length, cap) in [(Length::Short, 2), (Length::Medium, 3), (Length::Detailed, 4)] {
            let letter = generate_cover_letter(&profile(), JOB, &options(Tone::Professional, length, 6));
            assert!(letter.contains("Key highlights from my background:\n"));
            let listed = letter.lines().filter(|l| l.starts_with("- Highlight")).count();
            assert_eq!(listed, cap, "{length:?}");
        }
    }

    #[test]
    fn test_matching_skills_limited_to_four() {
        let letter = generate_cover_letter(&profile(), JOB, &options(Tone::Professional, Length::Medium, 0));
        let skills_line = letter
            .lines()
            .find(|l| l.starts_with("My experience with"))
            .unwrap();
        assert_eq!(
            skills_line.matches(", ").count(),
            3,
            "four skills joined: {skills_line}"
        );
        assert!(!skills_line.contains("docker"));
    }

    #[test]
    fn test_short_letter_drops_summary() {
        let letter = generate_cover_letter(&profile(), JOB, &options(Tone::Professional, Length::Short, 0));
        assert!(!letter.contains("event-driven"));
        assert!(letter.contains("Thank you for your time.\n\nBest regards,\nJane Doe"));
    }

    #[test]
    fn test_detailed_letter_quotes_responsibilities() {
        let letter = generate_cover_letter(&profile(), JOB, &options(Tone::Professional, Length::Detailed, 0));
        assert!(letter.contains(
            "I am particularly prepared to take on responsibilities such as You will build reliable data pipelines for customers and You will mentor engineers across the team."
        ));
    }

    #[test]
    fn test_elevator_pitch_replaces_title_intro() {
        let mut candidate = profile();
        candidate.elevator_pitch = Some("I turn flaky pipelines into boring ones.".to_string());
        let letter = generate_cover_letter(&candidate, JOB, &options(Tone::Professional, Length::Medium, 0));
        assert!(letter.contains("I turn flaky pipelines into boring ones."));
        assert!(!letter.contains("As a Backend Engineer"));
    }

    #[test]
    fn test_no_matching_skills_omits_skill_sentence() {
        let candidate = CoverLetterProfile {
            name: "Sam".to_string(),
            ..Default::default()
        };
        let letter = generate_cover_letter(&candidate, JOB, &options(Tone::Formal, Length::Medium, 0));
        assert!(!letter.contains("My technical proficiency includes"));
        assert!(letter.ends_with("Respectfully yours,\nSam"));
    }

    #[test]
    fn test_cover_letter_counts() {
        let letter = CoverLetter::new("Dear team,\nhello".to_string());
        assert_eq!(letter.word_count, 3);
        assert_eq!(letter.character_count, 16);
    }

    #[test]
    fn test_tone_and_length_serde_names() {
        assert_eq!(serde_json::to_string(&Tone::Enthusiastic).unwrap(), "\"enthusiastic\"");
        let length: Length = serde_json::from_str("\"detailed\"").unwrap();
        assert_eq!(length, Length::Detailed);
    }
}
