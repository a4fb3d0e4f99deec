//! DOCX decoding: paragraph text from the `word/document.xml` part.
//!
//! Each `<w:p>` becomes one line; `<w:t>` runs inside it are concatenated,
//! `<w:tab/>` becomes a tab and `<w:br/>`/`<w:cr/>` a line break. Tab stops
//! declared in paragraph properties (`<w:tabs>`) are ignored.

use std::path::Path;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::TextDecoder;
use crate::errors::ResumeError;

pub const DOCUMENT_PART: &str = "word/document.xml";

lazy_static! {
    static ref XML_TOKEN: Regex = Regex::new(r"<[^>]*>|[^<]+").unwrap();
    static ref ENTITY: Regex = Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|amp|lt|gt|quot|apos);").unwrap();
}

pub struct DocxDecoder;

impl TextDecoder for DocxDecoder {
    fn format(&self) -> &'static str {
        "DOCX"
    }

    fn decode(&self, path: &Path) -> Result<String, ResumeError> {
        let xml = read_document_xml(path, self.format())?;
        Ok(paragraphs_from_xml(&xml))
    }
}

/// `.doc` files are only readable when they are OOXML archives under the
/// old extension; binary Word 97 documents are reported as undecodable.
pub struct LegacyDocDecoder;

impl TextDecoder for LegacyDocDecoder {
    fn format(&self) -> &'static str {
        "DOC"
    }

    fn decode(&self, path: &Path) -> Result<String, ResumeError> {
        match read_document_xml(path, self.format()) {
            Ok(xml) => Ok(paragraphs_from_xml(&xml)),
            Err(ResumeError::Decode { .. }) => Err(ResumeError::Decode {
                format: "DOC",
                message: "legacy binary .doc files are not supported; save the file as .docx"
                    .to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

#[cfg(feature = "docx")]
fn read_document_xml(path: &Path, format: &'static str) -> Result<String, ResumeError> {
    use std::io::Read;

    let decode_err = |message: String| {
        tracing::warn!("{} extraction failed for {}: {}", format, path.display(), message);
        ResumeError::Decode { format, message }
    };

    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| decode_err(e.to_string()))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| decode_err(format!("{DOCUMENT_PART}: {e}")))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| decode_err(e.to_string()))?;
    Ok(xml)
}

#[cfg(not(feature = "docx"))]
fn read_document_xml(_path: &Path, format: &'static str) -> Result<String, ResumeError> {
    Err(ResumeError::MissingDependency {
        format,
        hint: "rebuild resume-intel with `--features docx`",
    })
}

fn tag_name(tag: &str) -> &str {
    tag.trim_start_matches('<')
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .next()
        .unwrap_or("")
}

/// Flattens WordprocessingML body XML into newline-separated paragraphs.
pub fn paragraphs_from_xml(xml: &str) -> String {
    let mut out = String::new();
    let mut in_text = false;
    let mut tab_stops_depth = 0usize;

    for token in XML_TOKEN.find_iter(xml).map(|m| m.as_str()) {
        if !token.starts_with('<') {
            if in_text {
                out.push_str(&unescape_xml(token));
            }
            continue;
        }

        let closing = token.starts_with("</");
        let self_closing = token.ends_with("/>");
        match (tag_name(token), closing) {
            ("w:t", false) => in_text = !self_closing,
            ("w:t", true) => in_text = false,
            ("w:tabs", false) if !self_closing => tab_stops_depth += 1,
            ("w:tabs", true) => tab_stops_depth = tab_stops_depth.saturating_sub(1),
            ("w:tab", false) if tab_stops_depth == 0 => out.push('\t'),
            ("w:br" | "w:cr", false) => out.push('\n'),
            ("w:p", true) => out.push('\n'),
            ("w:p", false) if self_closing => out.push('\n'),
            _ => {}
        }
    }

    out.trim_end().to_string()
}

/// Replaces the five predefined XML entities and numeric character references.
pub fn unescape_xml(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| match &caps[1] {
            "amp" => "&".to_string(),
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "quot" => "\"".to_string(),
            "apos" => "'".to_string(),
            numeric => {
                let code = match numeric.strip_prefix("#x") {
                    Some(hex) => u32::from_str_radix(hex, 16).ok(),
                    None => numeric[1..].parse::<u32>().ok(),
                };
                code.and_then(char::from_u32)
                    .map(String::from)
                    .unwrap_or_else(|| caps[0].to_string())
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Experience</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">Engineer at </w:t></w:r><w:r><w:t>AT&amp;T</w:t></w:r><w:r><w:tab/><w:t>2019 - 2021</w:t></w:r></w:p>
<w:p><w:r><w:t>&#8226; Cut costs by 30&#37;</w:t><w:br/><w:t>second line</w:t></w:r></w:p>
<w:p/>
</w:body></w:document>"#;

    #[test]
    fn test_paragraphs_from_xml() {
        let text = paragraphs_from_xml(BODY);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Experience",
                "Engineer at AT&T\t2019 - 2021",
                "• Cut costs by 30%",
                "second line",
            ]
        );
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let xml = "<w:p><w:pPr><w:rStyle w:val=\"Heading\"/></w:pPr>stray<w:r><w:t>Kept</w:t></w:r></w:p>";
        assert_eq!(paragraphs_from_xml(xml), "Kept");
    }

    #[test]
    fn test_unescape_xml() {
        assert_eq!(unescape_xml("a &lt;b&gt; &quot;c&quot; &apos;d&apos;"), "a <b> \"c\" 'd'");
        assert_eq!(unescape_xml("&#x2022; &#8211;"), "• –");
        assert_eq!(unescape_xml("&unknown; &#xZZ;"), "&unknown; &#xZZ;");
    }

    #[cfg(feature = "docx")]
    mod archive {
        use std::io::Write;

        use super::super::*;
        use crate::decode::extract_text;

        fn write_docx(suffix: &str, parts: &[(&str, &str)]) -> tempfile::NamedTempFile {
            let file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
            let mut zip = zip::ZipWriter::new(file.reopen().unwrap());
            let options = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            for (name, body) in parts {
                zip.start_file(*name, options).unwrap();
                zip.write_all(body.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
            file
        }

        #[test]
        fn test_docx_archive_roundtrip_through_extract_text() {
            let file = write_docx(".docx", &[(DOCUMENT_PART, super::BODY)]);
            let text = extract_text(file.path()).unwrap();
            assert!(text.starts_with("Experience\nEngineer at AT&T"));
        }

        #[test]
        fn test_archive_without_document_part() {
            let file = write_docx(".docx", &[("word/styles.xml", "<w:styles/>")]);
            let err = DocxDecoder.decode(file.path()).unwrap_err();
            assert!(matches!(err, ResumeError::Decode { format: "DOCX", .. }));
        }

        #[test]
        fn test_doc_extension_holding_ooxml_is_read() {
            let file = write_docx(".doc", &[(DOCUMENT_PART, super::BODY)]);
            let text = LegacyDocDecoder.decode(file.path()).unwrap();
            assert!(text.contains("second line"));
        }

        #[test]
        fn test_binary_doc_is_decode_error() {
            let mut file = tempfile::Builder::new().suffix(".doc").tempfile().unwrap();
            file.write_all(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]).unwrap();
            let err = extract_text(file.path()).unwrap_err();
            assert!(matches!(err, ResumeError::Decode { format: "DOC", .. }));
        }
    }
}
