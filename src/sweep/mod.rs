//! The sweep pass over a source directory.
//!
//! A sweep lists the source directory once, then walks the listing
//! sequentially: parse each record file, test the poem-content predicate,
//! and relocate empty records into quarantine. The listing is materialized
//! up front so the iteration never observes its own file moves.

mod report;

pub use report::{Disposition, FileEntry, SweepReport};

use crate::audit;
use crate::config::{MalformedPolicy, SweepConfig};
use crate::core::error::SweepError;
use crate::core::record::RecordDocument;
use crate::quarantine::QuarantineDir;

use std::fs;
use std::path::Path;

/// Executes the sweep described by a [`SweepConfig`].
#[derive(Debug, Clone)]
pub struct Sweeper {
    /// Configuration for the run.
    config: SweepConfig,
}

impl Sweeper {
    /// Creates a sweeper for the given configuration.
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Runs the sweep to completion and returns its report.
    ///
    /// Fails before touching any file if the source directory is missing or
    /// unreadable, or if the quarantine directory cannot be created. With
    /// [`MalformedPolicy::Abort`] the first unusable record also fails the
    /// run; every other per-file problem is logged, counted, and skipped.
    pub fn run(&self) -> Result<SweepReport, SweepError> {
        let source_dir = &self.config.source_dir;
        if !source_dir.is_dir() {
            return Err(SweepError::source_missing(source_dir));
        }

        // An unlistable source must abort before the quarantine directory
        // is created.
        let filenames = self.list_record_files(source_dir)?;
        let quarantine = QuarantineDir::open(&self.config.quarantine_dir)?;

        let mut sweep_report = SweepReport::new(source_dir, quarantine.path());
        audit::emit_sweep_started(
            &sweep_report.id,
            source_dir,
            quarantine.path(),
            filenames.len(),
        );

        for filename in filenames {
            let path = source_dir.join(&filename);
            let disposition = self.process(&path, &quarantine)?;
            audit::emit_record_swept(&sweep_report.id, &filename, &disposition);
            sweep_report.record(filename, disposition);
        }

        sweep_report.finish();
        audit::emit_sweep_completed(&sweep_report);

        Ok(sweep_report)
    }

    /// Lists record filenames in the source directory, sorted for
    /// deterministic processing order.
    fn list_record_files(&self, source_dir: &Path) -> Result<Vec<String>, SweepError> {
        let entries = fs::read_dir(source_dir)
            .map_err(|e| SweepError::source_unreadable(source_dir, e))?;

        let mut filenames = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SweepError::source_unreadable(source_dir, e))?;
            let path = entry.path();
            if !path.is_file() || !self.config.matches_extension(&path) {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => filenames.push(name),
                Err(name) => {
                    tracing::warn!(filename = ?name, "Skipping non-UTF-8 filename");
                }
            }
        }

        filenames.sort();
        Ok(filenames)
    }

    /// Handles one record file and returns its disposition.
    fn process(&self, path: &Path, quarantine: &QuarantineDir) -> Result<Disposition, SweepError> {
        let document = match RecordDocument::load(path) {
            Ok(document) => document,
            Err(err) => match self.config.on_malformed {
                MalformedPolicy::Abort => return Err(err.into()),
                MalformedPolicy::Skip => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "Skipping unusable record"
                    );
                    return Ok(Disposition::Malformed {
                        reason: err.to_string(),
                    });
                }
            },
        };

        if document.has_poem_content() {
            return Ok(Disposition::Kept);
        }

        match quarantine.relocate(path, self.config.on_collision) {
            Ok(destination) => Ok(Disposition::Quarantined { destination }),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Failed to relocate record"
                );
                Ok(Disposition::Failed {
                    reason: err.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_source_fails_before_setup() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("no-such-corpus");
        let quarantine = temp_dir.path().join("quarantine");

        let err = Sweeper::new(SweepConfig::new(&source, &quarantine))
            .run()
            .unwrap_err();

        assert!(matches!(err, SweepError::SourceMissing { .. }));
        assert!(err.is_setup());
        // Aborted before any setup mutated the filesystem.
        assert!(!quarantine.exists());
    }

    #[test]
    fn test_empty_source_creates_quarantine() {
        let source_dir = TempDir::new().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let quarantine = temp_dir.path().join("quarantine");

        let report = Sweeper::new(SweepConfig::new(source_dir.path(), &quarantine))
            .run()
            .unwrap();

        assert_eq!(report.scanned, 0);
        assert!(quarantine.is_dir());
    }
}
