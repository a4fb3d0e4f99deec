//! Impact language rules shared by the suggestion generator and the tailoring checks.
//!
//! All checks lower-case their input; callers may pass text as written.

use lazy_static::lazy_static;
use regex::Regex;

/// Passive openers that hide ownership. Checked in order; the first hit is reported.
pub const WEAK_PHRASES: &[&str] = &[
    "responsible for",
    "worked on",
    "helped with",
    "assisted",
    "participated in",
    "involved in",
];

/// Verbs that state an outcome.
pub const IMPACT_VERBS: &[&str] = &[
    "increased",
    "decreased",
    "improved",
    "reduced",
    "saved",
    "generated",
    "grew",
    "achieved",
];

/// Words that show system design or scaling work.
pub const DESIGN_DEPTH_TERMS: &[&str] = &[
    "architected",
    "designed",
    "built from scratch",
    "scaled",
    "optimized",
];

/// Words that mark seniority in a resume.
pub const SENIORITY_TERMS: &[&str] = &["lead", "senior", "architect"];

lazy_static! {
    static ref QUANTIFIED: Regex =
        Regex::new(r"\d+%|\d+x|\$\d+|\d+ (?:million|thousand|users?|customers?|requests?)").unwrap();
}

/// True when the text carries a percentage, multiplier, dollar amount or counted scale.
pub fn is_quantified(text: &str) -> bool {
    QUANTIFIED.is_match(&text.to_lowercase())
}

/// First weak phrase found in the text.
pub fn find_weak_phrase(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    WEAK_PHRASES.iter().copied().find(|p| lower.contains(p))
}

pub fn has_impact_verb(text: &str) -> bool {
    contains_any(text, IMPACT_VERBS)
}

pub fn has_design_depth(text: &str) -> bool {
    contains_any(text, DESIGN_DEPTH_TERMS)
}

pub fn has_seniority_signal(text: &str) -> bool {
    contains_any(text, SENIORITY_TERMS)
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().any(|t| lower.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantified_patterns() {
        for text in [
            "Cut latency by 40%",
            "Made deploys 3x faster",
            "Saved $200k per year",
            "Served 2 million requests",
            "Onboarded 300 customers",
            "Handled 10 USERS",
        ] {
            assert!(is_quantified(text), "{text}");
        }
    }

    #[test]
    fn test_unquantified_text() {
        assert!(!is_quantified("Worked on the billing system"));
        assert!(!is_quantified("Team of 5 engineers"));
        assert!(!is_quantified(""));
    }

    #[test]
    fn test_first_weak_phrase_wins() {
        assert_eq!(
            find_weak_phrase("Assisted seniors. Responsible for on-call."),
            Some("responsible for")
        );
        assert_eq!(find_weak_phrase("Worked On payments"), Some("worked on"));
        assert_eq!(find_weak_phrase("Led the payments team"), None);
    }

    #[test]
    fn test_impact_and_depth_terms() {
        assert!(has_impact_verb("Reduced cloud spend"));
        assert!(!has_impact_verb("Wrote code"));
        assert!(has_design_depth("Architected the event bus"));
        assert!(has_design_depth("built from scratch a new CLI"));
        assert!(!has_design_depth("Maintained legacy services"));
    }

    #[test]
    fn test_seniority_signal() {
        assert!(has_seniority_signal("Tech Lead at Acme"));
        assert!(has_seniority_signal("Senior Engineer"));
        assert!(!has_seniority_signal("Software Engineer"));
    }
}
