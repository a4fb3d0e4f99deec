//! Section Segmenter: labels contiguous resume lines by section type.
//!
//! A line is a header when the text before an optional colon is at most
//! 50 characters and matches one of the ordered header rules. Anything
//! after the colon becomes the first line of the new section.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

const MAX_HEADER_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Lines before the first recognized header (name, contact details).
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

struct HeaderRule {
    kind: SectionKind,
    pattern: Regex,
    /// Whether `Header: content` on one line counts. Off for words that also
    /// label lines inside entries, such as a project's "Technologies: ...".
    allows_inline: bool,
}

fn rule(kind: SectionKind, alternation: &str) -> HeaderRule {
    HeaderRule {
        kind,
        pattern: Regex::new(&format!(r"(?i)^(?:{alternation})$")).unwrap(),
        allows_inline: true,
    }
}

fn standalone_rule(kind: SectionKind, alternation: &str) -> HeaderRule {
    HeaderRule {
        allows_inline: false,
        ..rule(kind, alternation)
    }
}

lazy_static! {
    static ref HEADER_RULES: Vec<HeaderRule> = vec![
        rule(
            SectionKind::Summary,
            r"(?:professional\s+|career\s+|executive\s+)?(?:summary|profile|objective|overview)|about(?:\s+me)?",
        ),
        rule(
            SectionKind::Experience,
            r"(?:work\s+|professional\s+|relevant\s+|industry\s+)?experience|employment(?:\s+history)?|(?:work|career)\s+history",
        ),
        rule(
            SectionKind::Education,
            r"education(?:\s+(?:&|and)\s+training)?|academic\s+background|academics",
        ),
        rule(
            SectionKind::Skills,
            r"(?:technical\s+|core\s+|key\s+)?(?:skills|competencies)(?:\s+(?:&|and)\s+\w+)?",
        ),
        standalone_rule(
            SectionKind::Skills,
            r"technologies|tech(?:nical)?\s+stack|expertise",
        ),
        rule(
            SectionKind::Projects,
            r"(?:personal\s+|side\s+|selected\s+|academic\s+|key\s+)?projects?",
        ),
        rule(
            SectionKind::Certifications,
            r"certifications?(?:\s+(?:&|and)\s+licen[cs]es?)?|licen[cs]es?(?:\s+(?:&|and)\s+certifications?)?|certificates?|credentials",
        ),
    ];
}

/// Classifies a line as a section header.
///
/// Returns the section kind and any inline content that followed a colon
/// (`"Skills: Python, SQL"` yields `Skills` and `Some("Python, SQL")`).
pub fn classify_header(line: &str) -> Option<(SectionKind, Option<&str>)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (candidate, inline) = match trimmed.split_once(':') {
        Some((head, rest)) => {
            let rest = rest.trim();
            (head.trim(), (!rest.is_empty()).then_some(rest))
        }
        None => (trimmed, None),
    };

    if candidate.is_empty() || candidate.chars().count() > MAX_HEADER_CHARS {
        return None;
    }

    HEADER_RULES
        .iter()
        .filter(|r| inline.is_none() || r.allows_inline)
        .find(|r| r.pattern.is_match(candidate))
        .map(|r| (r.kind, inline))
}

/// True when the text is, by itself, a section header.
pub fn is_header(text: &str) -> bool {
    classify_header(text).is_some()
}

/// Resume lines grouped by section. Each header occurrence opens its own
/// line group, kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    buckets: BTreeMap<SectionKind, Vec<Vec<String>>>,
}

impl Sections {
    /// One line group per occurrence of the section header.
    pub fn groups(&self, kind: SectionKind) -> &[Vec<String>] {
        self.buckets.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All lines of a section, occurrences separated by a blank line; empty
    /// when the section was never opened.
    pub fn lines(&self, kind: SectionKind) -> Vec<String> {
        let mut lines = Vec::new();
        for (idx, group) in self.groups(kind).iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            lines.extend(group.iter().cloned());
        }
        lines
    }

    /// Section kinds that received at least one header, excluding the untyped bucket.
    pub fn found(&self) -> Vec<SectionKind> {
        self.buckets
            .keys()
            .copied()
            .filter(|k| *k != SectionKind::Header)
            .collect()
    }

    fn open(&mut self, kind: SectionKind) -> &mut Vec<String> {
        let groups = self.buckets.entry(kind).or_default();
        groups.push(Vec::new());
        let last = groups.len() - 1;
        &mut groups[last]
    }

    fn push(&mut self, kind: SectionKind, line: String) {
        let groups = self.buckets.entry(kind).or_default();
        match groups.last_mut() {
            Some(group) => group.push(line),
            None => groups.push(vec![line]),
        }
    }
}

/// Splits resume text into section buckets.
pub fn segment_sections(text: &str) -> Sections {
    let mut sections = Sections::default();
    let mut current = SectionKind::Header;

    for line in text.lines() {
        if let Some((kind, inline)) = classify_header(line) {
            current = kind;
            let group = sections.open(kind);
            if let Some(inline) = inline {
                group.push(inline.to_string());
            }
            continue;
        }
        sections.push(current, line.trim_end().to_string());
    }

    debug!("Segmented resume into sections: {:?}", sections.found());
    sections
}
