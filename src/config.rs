//! Sweep configuration.
//!
//! A [`SweepConfig`] names the two directories involved in a sweep and the
//! policies applied when a record file misbehaves. Defaults match the
//! historical pipeline behavior: `.json` records, malformed files are
//! skipped with a warning, and quarantine collisions are overwritten.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How to treat a record file that cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Log the file, count it, and continue the sweep.
    #[default]
    Skip,
    /// Fail the whole run on the first unusable file.
    Abort,
}

/// How to handle a filename collision inside the quarantine directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Replace the file already in quarantine.
    #[default]
    Overwrite,
    /// Relocate under the first free `name.N.ext` instead.
    Rename,
    /// Leave the source file in place and count a relocation failure.
    Skip,
}

/// Configuration for a sweep run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Directory containing the record files to inspect.
    pub source_dir: PathBuf,

    /// Directory that receives quarantined records; created if missing.
    pub quarantine_dir: PathBuf,

    /// Extension marking an entry as a record file (without the dot).
    pub extension: String,

    /// Policy for record files that cannot be read or parsed.
    pub on_malformed: MalformedPolicy,

    /// Policy for filename collisions in the quarantine directory.
    pub on_collision: CollisionPolicy,
}

impl SweepConfig {
    /// Creates a configuration for the given source and quarantine paths,
    /// with default policies and the `json` record extension.
    pub fn new(source_dir: impl Into<PathBuf>, quarantine_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            quarantine_dir: quarantine_dir.into(),
            extension: "json".to_string(),
            on_malformed: MalformedPolicy::default(),
            on_collision: CollisionPolicy::default(),
        }
    }

    /// Sets the record file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets the malformed-file policy.
    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    /// Sets the collision policy.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    /// Returns `true` if the path carries the configured record extension.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
    }
}
