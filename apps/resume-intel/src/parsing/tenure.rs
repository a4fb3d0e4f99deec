//! Years-of-experience estimate.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Explicit statements, tried in order; each has one numeric capture.
    static ref EXPLICIT_YEARS: Vec<Regex> = vec![
        Regex::new(r"(\d+)\+?\s*years?\s*(?:of\s*)?(?:professional\s*)?(?:experience|expertise)").unwrap(),
        Regex::new(r"(?:experience|expertise)[:.\s]*(\d+)\+?\s*years?").unwrap(),
        Regex::new(r"(\d+)\s*years?\s*in\s*(?:software|tech|development|engineering)").unwrap(),
    ];
    static ref ANY_YEAR: Regex = Regex::new(r"(?:19|20)\d{2}").unwrap();
}

/// Estimates years of experience: an explicit "N years of experience" style
/// statement wins; otherwise the spread between the earliest and latest
/// year mentioned, when at least two years appear.
pub fn extract_years_of_experience(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    let explicit = EXPLICIT_YEARS
        .iter()
        .find_map(|rule| rule.captures(&lower))
        .and_then(|caps| caps[1].parse::<u32>().ok());
    if explicit.is_some() {
        return explicit;
    }

    let years: Vec<u32> = ANY_YEAR
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    if years.len() < 2 {
        return None;
    }
    let min = years.iter().min()?;
    let max = years.iter().max()?;
    Some(max - min)
}
