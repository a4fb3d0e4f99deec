//! Education entry extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::ResumeEducation;
use crate::parsing::splitter::{has_keyword, INSTITUTION_KEYWORDS};
use crate::text::strip_bullet;

lazy_static! {
    /// Degree patterns, most specific first.
    static ref DEGREE_RULES: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:ph\.?\s?d\.?|doctor(?:ate)?\s+of\s+philosophy|doctorate)").unwrap(),
        Regex::new(r"(?i)\bm\.?b\.?a\b\.?").unwrap(),
        Regex::new(
            r"(?i)\bmaster(?:'s|’s|s)?(?:\s+of\s+(?:business\s+administration|applied\s+science|science|arts|engineering|fine\s+arts))?|\bm\.s\.|\bm\.a\.|\bm\.sc\.?"
        )
        .unwrap(),
        Regex::new(
            r"(?i)\bbachelor(?:'s|’s|s)?(?:\s+of\s+(?:applied\s+science|science|arts|engineering|fine\s+arts|technology))?|\bb\.s\.|\bb\.a\.|\bb\.sc\.?|\bb\.tech\b|\bb\.e\."
        )
        .unwrap(),
        Regex::new(
            r"(?i)\bassociate(?:'s|’s|s)?(?:\s+of\s+(?:applied\s+science|science|arts))?|\ba\.a\.|\ba\.s\."
        )
        .unwrap(),
    ];
    static ref YEAR: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();
    static ref GPA: Regex = Regex::new(r"(?i)\bGPA\s*[:\-]?\s*(\d+(?:\.\d+)?)").unwrap();
    static ref SEGMENT_SPLIT: Regex = Regex::new(r",|\||\s[-–—]\s").unwrap();
    static ref FIELD_PREFIX: Regex = Regex::new(r"(?i)^(?:in|of)\s+").unwrap();
}

const FIELD_DELIMITERS: &[char] = &[',', '|', '(', ';', '–', '—', '\t'];

/// Parses one education entry. Returns `None` for an empty group.
pub fn parse_education_entry(lines: &[String]) -> Option<ResumeEducation> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|l| strip_bullet(l))
        .filter(|l| !l.is_empty())
        .collect();
    let first = *lines.first()?;

    let school = lines
        .iter()
        .find_map(|l| institution_segment(l))
        .unwrap_or_else(|| first.to_string());

    let (degree, field) = match lines.iter().find_map(|l| find_degree(l)) {
        Some((degree, field)) => (Some(degree), field),
        None => (None, None),
    };

    let joined = lines.join("\n");
    let year = YEAR.find_iter(&joined).last().map(|m| m.as_str().to_string());
    let gpa = GPA
        .captures(&joined)
        .and_then(|caps| caps[1].parse::<f64>().ok());

    Some(ResumeEducation {
        school,
        degree,
        field,
        year,
        gpa,
    })
}

/// The comma/pipe/dash segment of `line` that names an institution.
fn institution_segment(line: &str) -> Option<String> {
    if !has_keyword(line, INSTITUTION_KEYWORDS) {
        return None;
    }
    SEGMENT_SPLIT
        .split(line)
        .map(str::trim)
        .find(|seg| has_keyword(seg, INSTITUTION_KEYWORDS))
        .map(str::to_string)
}

/// Finds the first degree token in `line` and the field of study that follows it.
pub fn find_degree(line: &str) -> Option<(String, Option<String>)> {
    let m = DEGREE_RULES.iter().find_map(|rule| rule.find(line))?;
    let degree = m.as_str().trim().to_string();
    Some((degree, extract_field(&line[m.end()..])))
}

fn extract_field(rest: &str) -> Option<String> {
    let rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ':' || c == ',');
    let rest = FIELD_PREFIX.replace(rest, "");
    let end = rest
        .char_indices()
        .find(|(i, c)| {
            FIELD_DELIMITERS.contains(c) || c.is_ascii_digit() || rest[*i..].starts_with(" - ")
        })
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    let field = rest[..end].trim();
    let field = field
        .strip_suffix(" GPA")
        .or_else(|| field.strip_suffix(" gpa"))
        .unwrap_or(field)
        .trim();
    (!field.is_empty()).then(|| field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn test_full_entry() {
        let entry = parse_education_entry(&lines(
            "Stanford University\nM.S. in Computer Science, 2016 - 2018\nGPA: 3.9",
        ))
        .unwrap();
        assert_eq!(entry.school, "Stanford University");
        assert_eq!(entry.degree.as_deref(), Some("M.S."));
        assert_eq!(entry.field.as_deref(), Some("Computer Science"));
        assert_eq!(entry.year.as_deref(), Some("2018"));
        assert_eq!(entry.gpa, Some(3.9));
    }

    #[test]
    fn test_degree_line_first_school_second() {
        let entry = parse_education_entry(&lines(
            "Bachelor of Science in Mathematics\nUniversity of Texas | Austin | 2014",
        ))
        .unwrap();
        assert_eq!(entry.school, "University of Texas");
        assert_eq!(entry.degree.as_deref(), Some("Bachelor of Science"));
        assert_eq!(entry.field.as_deref(), Some("Mathematics"));
        assert_eq!(entry.year.as_deref(), Some("2014"));
        assert_eq!(entry.gpa, None);
    }

    #[test]
    fn test_no_institution_keyword_uses_first_line() {
        let entry = parse_education_entry(&lines("MIT\nPhD, Physics")).unwrap();
        assert_eq!(entry.school, "MIT");
        assert_eq!(entry.degree.as_deref(), Some("PhD"));
        assert_eq!(entry.field.as_deref(), Some("Physics"));
    }

    #[test]
    fn test_degree_rules_in_priority_order() {
        assert_eq!(find_degree("MBA, Finance").map(|d| d.0).as_deref(), Some("MBA"));
        assert_eq!(
            find_degree("Master's in Data Science").map(|d| (d.0, d.1)),
            Some(("Master's".to_string(), Some("Data Science".to_string())))
        );
        assert_eq!(
            find_degree("Master of Business Administration").map(|d| d.0).as_deref(),
            Some("Master of Business Administration")
        );
        assert_eq!(
            find_degree("Associate of Arts in Design").map(|d| (d.0, d.1)),
            Some(("Associate of Arts".to_string(), Some("Design".to_string())))
        );
        assert_eq!(find_degree("B.A. English").map(|d| d.1), Some(Some("English".to_string())));
        assert!(find_degree("Dean's list all semesters").is_none());
    }

    #[test]
    fn test_field_stops_at_year_and_gpa() {
        let (_, field) = find_degree("B.S. Computer Science 2019").unwrap();
        assert_eq!(field.as_deref(), Some("Computer Science"));
        let (_, field) = find_degree("B.S. Computer Science GPA 3.5").unwrap();
        assert_eq!(field.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_year_is_last_year_in_entry() {
        let entry = parse_education_entry(&lines("State College\n2010 - 2014")).unwrap();
        assert_eq!(entry.year.as_deref(), Some("2014"));
    }

    #[test]
    fn test_gpa_without_colon() {
        let entry = parse_education_entry(&lines("Boston University\nGPA 3.72/4.0")).unwrap();
        assert_eq!(entry.gpa, Some(3.72));
    }

    #[test]
    fn test_empty_group_is_none() {
        assert!(parse_education_entry(&[]).is_none());
    }
}
