//! Skills and certifications extraction.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::parsing::sections::is_header;
use crate::taxonomy;
use crate::text::{dedup_case_insensitive, strip_bullet, truncate_chars, MAX_SCAN_CHARS};

const MAX_SKILLS: usize = 50;
const MAX_CERTIFICATIONS: usize = 20;
const MIN_SKILL_CHARS: usize = 3;
const MAX_SKILL_CHARS: usize = 50;

lazy_static! {
    static ref SKILL_DELIMITERS: Regex = Regex::new(r"[,;•\-*▪◦|/\n]").unwrap();
}

/// Extracts skills from the skills section lines, then recovers any taxonomy
/// skill mentioned anywhere in `full_text`.
pub fn extract_skills(section_lines: &[String], full_text: &str) -> Vec<String> {
    let section = section_lines.join("\n");

    let tokens = SKILL_DELIMITERS.split(&section).filter_map(|raw| {
        let token = match raw.split_once(':') {
            Some((_, item)) => item.trim(),
            None => raw.trim(),
        };
        let len = token.chars().count();
        let keep = (MIN_SKILL_CHARS..MAX_SKILL_CHARS).contains(&len) && !is_header(token);
        keep.then(|| token.to_string())
    });

    let recovered = taxonomy::find_skills(truncate_chars(full_text, MAX_SCAN_CHARS))
        .into_iter()
        .map(str::to_string);

    let mut skills = dedup_case_insensitive(tokens.chain(recovered));
    skills.truncate(MAX_SKILLS);
    debug!("Extracted {} skills", skills.len());
    skills
}

/// One certification per bullet-stripped line longer than three characters.
pub fn extract_certifications(section_lines: &[String]) -> Vec<String> {
    section_lines
        .iter()
        .map(|l| strip_bullet(l))
        .filter(|l| l.chars().count() > 3)
        .take(MAX_CERTIFICATIONS)
        .map(str::to_string)
        .collect()
}
