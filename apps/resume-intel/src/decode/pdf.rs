use std::path::Path;

use super::TextDecoder;
use crate::errors::ResumeError;

/// PDF page-text extraction through `pdf-extract`.
pub struct PdfDecoder;

impl TextDecoder for PdfDecoder {
    fn format(&self) -> &'static str {
        "PDF"
    }

    #[cfg(feature = "pdf")]
    fn decode(&self, path: &Path) -> Result<String, ResumeError> {
        pdf_extract::extract_text(path).map_err(|e| {
            tracing::warn!("PDF extraction failed for {}: {}", path.display(), e);
            ResumeError::Decode {
                format: "PDF",
                message: e.to_string(),
            }
        })
    }

    #[cfg(not(feature = "pdf"))]
    fn decode(&self, _path: &Path) -> Result<String, ResumeError> {
        Err(ResumeError::MissingDependency {
            format: "PDF",
            hint: "rebuild resume-intel with `--features pdf`",
        })
    }
}
