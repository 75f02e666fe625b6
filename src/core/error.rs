//! Error types for the poemsweep library.
//!
//! This module provides structured, typed errors for all failure scenarios.
//! The library never panics; all errors are returned as `Result` values.
//! Setup errors are fatal and abort a sweep before any file is processed;
//! record errors are scoped to a single file and can be isolated by policy.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for sweep operations.
///
/// Every variant carries the path involved so failures can be reported
/// against a concrete location on disk.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The source directory does not exist.
    #[error("source directory does not exist: {}", .path.display())]
    SourceMissing {
        /// Path that was expected to be a directory.
        path: PathBuf,
    },

    /// The source directory exists but could not be listed.
    #[error("failed to read source directory {}: {source}", .path.display())]
    SourceUnreadable {
        /// Path of the unreadable directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The quarantine directory could not be created.
    #[error("failed to create quarantine directory {}: {source}", .path.display())]
    QuarantineUnavailable {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A per-file error escalated to a run failure by policy.
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl SweepError {
    /// Creates a `SourceMissing` error.
    pub fn source_missing(path: impl Into<PathBuf>) -> Self {
        Self::SourceMissing { path: path.into() }
    }

    /// Creates a `SourceUnreadable` error.
    pub fn source_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Creates a `QuarantineUnavailable` error.
    pub fn quarantine_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::QuarantineUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error occurred before any file was processed.
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            Self::SourceMissing { .. }
                | Self::SourceUnreadable { .. }
                | Self::QuarantineUnavailable { .. }
        )
    }
}

/// Error type for operations on a single record file.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record file could not be read from disk.
    #[error("failed to read record {}: {source}", .path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The record file is not a valid JSON object.
    #[error("malformed record {}: {source}", .path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The record file could not be moved into quarantine.
    #[error("failed to relocate record {}: {source}", .path.display())]
    Relocate {
        /// Path of the file that stayed in place.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A file with the same name already exists in quarantine.
    #[error("quarantine destination already exists: {}", .destination.display())]
    Collision {
        /// The occupied destination path.
        destination: PathBuf,
    },
}

impl RecordError {
    /// Returns `true` if this error means the file content was unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }

    /// Returns the source-directory path this error is associated with.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Relocate { path, .. } => {
                Some(path)
            }
            Self::Collision { .. } => None,
        }
    }
}

/// A specialized `Result` type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// A specialized `Result` type for single-record operations.
pub type RecordResult<T> = Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_error_is_setup() {
        let missing = SweepError::source_missing("/no/such/dir");
        assert!(missing.is_setup());

        let record = SweepError::Record(RecordError::Collision {
            destination: PathBuf::from("quarantine/a.json"),
        });
        assert!(!record.is_setup());
    }

    #[test]
    fn test_sweep_error_display() {
        let err = SweepError::source_missing("/data/corpus");
        assert!(err.to_string().contains("/data/corpus"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_record_error_classification() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let read = RecordError::Read {
            path: PathBuf::from("a.json"),
            source: io,
        };
        assert!(read.is_malformed());
        assert_eq!(read.path(), Some(Path::new("a.json")));

        let collision = RecordError::Collision {
            destination: PathBuf::from("q/a.json"),
        };
        assert!(!collision.is_malformed());
        assert_eq!(collision.path(), None);
    }
}
