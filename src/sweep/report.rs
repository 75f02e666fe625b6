//! Sweep run reports.
//!
//! This module defines [`SweepReport`] and related types that represent the
//! outcome of a sweep, including per-file dispositions, final counts, and
//! timing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// How a single record file was handled during a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Disposition {
    /// The record has poem content and stayed in the source directory.
    Kept,

    /// The record had no poem content and was moved into quarantine.
    Quarantined {
        /// Where the file now lives.
        destination: PathBuf,
    },

    /// The record could not be read or parsed and was left in place.
    Malformed {
        /// Why the file was unusable.
        reason: String,
    },

    /// Relocation was attempted and failed; the file was left in place.
    Failed {
        /// Why relocation failed.
        reason: String,
    },
}

impl Disposition {
    /// Returns `true` if the file stayed in place with poem content.
    pub fn is_kept(&self) -> bool {
        matches!(self, Self::Kept)
    }

    /// Returns `true` if the file was moved into quarantine.
    pub fn is_quarantined(&self) -> bool {
        matches!(self, Self::Quarantined { .. })
    }

    /// Returns `true` if the file was skipped as unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns `true` if relocation failed for the file.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Per-file outcome recorded in a [`SweepReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Filename within the source directory.
    pub filename: String,

    /// How the file was handled.
    pub disposition: Disposition,
}

/// The complete result of a sweep run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Unique identifier for this run.
    pub id: String,

    /// Directory that was swept.
    pub source_dir: PathBuf,

    /// Directory that received quarantined records.
    pub quarantine_dir: PathBuf,

    /// Record files inspected.
    pub scanned: usize,

    /// Files moved into quarantine.
    pub quarantined: usize,

    /// Files left in place with poem content.
    pub kept: usize,

    /// Files skipped because they could not be read or parsed.
    pub malformed: usize,

    /// Files whose relocation failed.
    pub failed: usize,

    /// Per-file outcomes, in scan order.
    pub entries: Vec<FileEntry>,

    /// When the sweep started.
    pub started_at: DateTime<Utc>,

    /// When the sweep finished.
    pub completed_at: DateTime<Utc>,

    /// Total wall-clock duration.
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl SweepReport {
    /// Creates an empty report for a sweep that is starting now.
    pub fn new(source_dir: impl Into<PathBuf>, quarantine_dir: impl Into<PathBuf>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_dir: source_dir.into(),
            quarantine_dir: quarantine_dir.into(),
            scanned: 0,
            quarantined: 0,
            kept: 0,
            malformed: 0,
            failed: 0,
            entries: Vec::new(),
            started_at: now,
            completed_at: now,
            duration: Duration::ZERO,
        }
    }

    /// Records the disposition of one file and updates the counts.
    pub fn record(&mut self, filename: impl Into<String>, disposition: Disposition) {
        self.scanned += 1;
        match &disposition {
            Disposition::Kept => self.kept += 1,
            Disposition::Quarantined { .. } => self.quarantined += 1,
            Disposition::Malformed { .. } => self.malformed += 1,
            Disposition::Failed { .. } => self.failed += 1,
        }
        self.entries.push(FileEntry {
            filename: filename.into(),
            disposition,
        });
    }

    /// Stamps the completion time and duration.
    pub fn finish(&mut self) {
        self.completed_at = Utc::now();
        self.duration = (self.completed_at - self.started_at)
            .to_std()
            .unwrap_or_default();
    }

    /// Returns `true` if every inspected file was handled without errors.
    pub fn is_clean(&self) -> bool {
        self.malformed == 0 && self.failed == 0
    }

    /// Returns the one-line human summary of the run.
    pub fn summary(&self) -> String {
        format!(
            "{} records scanned: {} quarantined, {} kept, {} malformed, {} failed",
            self.scanned, self.quarantined, self.kept, self.malformed, self.failed
        )
    }
}

/// Serde helper for millisecond duration fields.
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = SweepReport::new("corpus", "quarantine");
        report.record("a.json", Disposition::Kept);
        report.record(
            "b.json",
            Disposition::Quarantined {
                destination: PathBuf::from("quarantine/b.json"),
            },
        );
        report.record(
            "c.json",
            Disposition::Malformed {
                reason: "expected value at line 1".into(),
            },
        );
        report.finish();

        assert_eq!(report.scanned, 3);
        assert_eq!(report.quarantined, 1);
        assert_eq!(report.kept, 1);
        assert_eq!(report.malformed, 1);
        assert_eq!(report.failed, 0);
        assert_eq!(
            report.scanned,
            report.quarantined + report.kept + report.malformed + report.failed
        );
        assert!(!report.is_clean());
        assert!(report.completed_at >= report.started_at);
    }

    #[test]
    fn test_report_summary() {
        let mut report = SweepReport::new("corpus", "quarantine");
        report.record(
            "b.json",
            Disposition::Quarantined {
                destination: PathBuf::from("quarantine/b.json"),
            },
        );
        assert_eq!(
            report.summary(),
            "1 records scanned: 1 quarantined, 0 kept, 0 malformed, 0 failed"
        );
    }

    #[test]
    fn test_report_serializes() {
        let mut report = SweepReport::new("corpus", "quarantine");
        report.record("a.json", Disposition::Kept);
        report.finish();

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"kept\":1"));
        assert!(json.contains("\"duration\""));

        let back: SweepReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scanned, 1);
        assert_eq!(back.entries.len(), 1);
    }

    #[test]
    fn test_disposition_helpers() {
        assert!(Disposition::Kept.is_kept());
        assert!(Disposition::Quarantined {
            destination: PathBuf::from("q/a.json")
        }
        .is_quarantined());
        assert!(Disposition::Malformed {
            reason: "bad".into()
        }
        .is_malformed());
        assert!(Disposition::Failed {
            reason: "denied".into()
        }
        .is_failed());
    }
}
