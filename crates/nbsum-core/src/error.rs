//! Error types for notebook loading and extraction

use std::path::PathBuf;
use thiserror::Error;

/// Error type for notebook operations
#[derive(Error, Debug)]
pub enum NotebookError {
    /// Input path does not refer to an existing file
    #[error("Notebook not found at: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error when reading notebook file
    #[error("Failed to read notebook file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse notebook JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid notebook structure or format
    #[error("Invalid notebook format: {0}")]
    InvalidFormat(String),

    /// Notebook version not supported
    #[error("Unsupported notebook version: {major}.{minor}")]
    UnsupportedVersion {
        /// Major version number
        major: u32,
        /// Minor version number
        minor: u32,
    },
}

/// Result type alias for notebook operations
pub type Result<T> = std::result::Result<T, NotebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_embeds_path() {
        let error = NotebookError::NotFound(PathBuf::from("missing/analysis.ipynb"));
        let display = format!("{error}");
        assert_eq!(display, "Notebook not found at: missing/analysis.ipynb");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: NotebookError = io_err.into();

        match err {
            NotebookError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
        let err: NotebookError = json_err.into();

        match err {
            NotebookError::Json(e) => {
                assert!(!e.to_string().is_empty(), "JSON error message should not be empty");
            }
            _ => panic!("Expected Json variant"),
        }
    }

    #[test]
    fn test_unsupported_version_display() {
        let error = NotebookError::UnsupportedVersion { major: 3, minor: 0 };
        assert_eq!(format!("{error}"), "Unsupported notebook version: 3.0");
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(NotebookError::InvalidFormat("missing nbformat".to_string()))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        match outer() {
            Err(NotebookError::InvalidFormat(msg)) => assert_eq!(msg, "missing nbformat"),
            _ => panic!("Expected InvalidFormat to propagate"),
        }
    }
}
