//! Error types for loading and exporting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a conversion. None of them are retried.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The input document could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not a valid property list.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: plist::Error,
    },

    /// A value that must be a dictionary is something else.
    #[error("{what} is not a dictionary")]
    NotADictionary { what: String },

    /// The top-level dictionary has no track collection.
    #[error("missing top-level key '{key}'")]
    MissingTracks { key: String },

    /// A track entry is not a dictionary of attributes.
    #[error("track '{id}' is not a dictionary")]
    InvalidRecord { id: String },

    /// The output file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error from a caller-supplied writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Returns `true` when the failure came from the input document rather
    /// than from writing the script.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Read { .. }
                | Self::Parse { .. }
                | Self::NotADictionary { .. }
                | Self::MissingTracks { .. }
                | Self::InvalidRecord { .. }
        )
    }
}

/// Convenience alias for load and export results.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::MissingTracks {
            key: String::from("Tracks"),
        };
        assert_eq!(err.to_string(), "missing top-level key 'Tracks'");

        let err = ExportError::InvalidRecord {
            id: String::from("17"),
        };
        assert_eq!(err.to_string(), "track '17' is not a dictionary");
    }

    #[test]
    fn test_input_errors_are_classified() {
        let missing = ExportError::MissingTracks {
            key: String::from("Tracks"),
        };
        assert!(missing.is_input_error());

        let write = ExportError::Write {
            path: PathBuf::from("/out.sql"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!write.is_input_error());
        assert!(write.to_string().starts_with("failed to write /out.sql"));
    }
}
