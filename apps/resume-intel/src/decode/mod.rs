//! File decoders: turn a resume document on disk into plain text.
//!
//! Decoding is the only fallible step of the engine. Formats are picked by
//! extension (case-insensitive); PDF and DOCX support are cargo features.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::errors::ResumeError;

pub use docx::{DocxDecoder, LegacyDocDecoder};
pub use pdf::PdfDecoder;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// One decoder per document format. Implementations never parse resume
/// structure; they only recover text.
pub trait TextDecoder: Send + Sync {
    /// Human-readable format label used in errors and logs.
    fn format(&self) -> &'static str;

    fn decode(&self, path: &Path) -> Result<String, ResumeError>;
}

/// Plain-text passthrough. Invalid UTF-8 is replaced rather than rejected.
pub struct PlainTextDecoder;

impl TextDecoder for PlainTextDecoder {
    fn format(&self) -> &'static str {
        "TXT"
    }

    fn decode(&self, path: &Path) -> Result<String, ResumeError> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Format detection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Text,
    Pdf,
    Docx,
    Doc,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, ResumeError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "txt" => Ok(DocumentFormat::Text),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "doc" => Ok(DocumentFormat::Doc),
            "" => Err(ResumeError::UnsupportedFormat("(no extension)".to_string())),
            other => Err(ResumeError::UnsupportedFormat(format!(".{other}"))),
        }
    }

    pub fn decoder(self) -> &'static dyn TextDecoder {
        match self {
            DocumentFormat::Text => &PlainTextDecoder,
            DocumentFormat::Pdf => &PdfDecoder,
            DocumentFormat::Docx => &DocxDecoder,
            DocumentFormat::Doc => &LegacyDocDecoder,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.decoder().format())
    }
}

/// Reads the document at `path` and returns its text.
///
/// A missing path is reported before the extension is looked at.
pub fn extract_text(path: &Path) -> Result<String, ResumeError> {
    if !path.exists() {
        return Err(ResumeError::FileNotFound(path.to_path_buf()));
    }
    let format = DocumentFormat::from_path(path)?;
    debug!("Decoding {} as {}", path.display(), format);
    let text = format.decoder().decode(path)?;
    debug!("Decoded {} characters", text.chars().count());
    Ok(text)
}
