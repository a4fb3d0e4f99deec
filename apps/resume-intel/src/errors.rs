use std::path::PathBuf;

use thiserror::Error;

/// Engine-level error type.
///
/// Only file decoding can fail. Text parsing, job analysis, scoring and suggestion
/// generation are total functions and degrade to empty structures instead.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// The decoder for this format was compiled out of the crate.
    #[error("{format} support is not available: {hint}")]
    MissingDependency {
        format: &'static str,
        hint: &'static str,
    },

    #[error("Unsupported file format: {0} (expected .txt, .pdf, .docx or .doc)")]
    UnsupportedFormat(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A decoder ran but could not recover text from the document.
    #[error("Failed to decode {format} document: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResumeError {
    /// Stable machine-readable code, used by the CLI when reporting failures.
    pub fn code(&self) -> &'static str {
        match self {
            ResumeError::MissingDependency { .. } => "MISSING_DEPENDENCY",
            ResumeError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ResumeError::FileNotFound(_) => "FILE_NOT_FOUND",
            ResumeError::Decode { .. } => "DECODE_ERROR",
            ResumeError::Io(_) => "IO_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_display_carries_hint() {
        let err = ResumeError::MissingDependency {
            format: "PDF",
            hint: "rebuild with `--features pdf`",
        };
        let display = err.to_string();
        assert!(display.contains("PDF"));
        assert!(display.contains("--features pdf"));
        assert_eq!(err.code(), "MISSING_DEPENDENCY");
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ResumeError::UnsupportedFormat(".odt".to_string());
        assert!(err.to_string().contains(".odt"));
        assert_eq!(err.code(), "UNSUPPORTED_FORMAT");
    }

    #[test]
    fn test_file_not_found_display_shows_path() {
        let err = ResumeError::FileNotFound(PathBuf::from("/tmp/missing.pdf"));
        assert!(err.to_string().contains("/tmp/missing.pdf"));
        assert_eq!(err.code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ResumeError = io.into();
        assert!(matches!(err, ResumeError::Io(_)));
        assert_eq!(err.code(), "IO_ERROR");
    }
}
