//! The quarantine destination directory.
//!
//! Quarantined record files are relocated as-is, preserving their filename,
//! so they can be reviewed (and restored) with ordinary tools. The directory
//! is created when the handle is opened; a failure to create it is fatal.

use crate::config::CollisionPolicy;
use crate::core::error::{RecordError, SweepError};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A quarantine directory that receives relocated record files.
#[derive(Debug, Clone)]
pub struct QuarantineDir {
    /// Destination directory path.
    path: PathBuf,
}

impl QuarantineDir {
    /// Opens the quarantine directory, creating it if it doesn't exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SweepError> {
        let path = path.into();

        fs::create_dir_all(&path)
            .map_err(|e| SweepError::quarantine_unavailable(path.clone(), e))?;

        Ok(Self { path })
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Moves a file into the quarantine directory, preserving its filename.
    ///
    /// Collisions with files already in quarantine are resolved according to
    /// `policy`. Returns the destination path the file now lives at; on any
    /// error the source file is left in place.
    pub fn relocate(&self, source: &Path, policy: CollisionPolicy) -> Result<PathBuf, RecordError> {
        let filename = source.file_name().ok_or_else(|| RecordError::Relocate {
            path: source.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "source path has no filename"),
        })?;

        let mut destination = self.path.join(filename);
        if destination.exists() {
            match policy {
                CollisionPolicy::Overwrite => {}
                CollisionPolicy::Rename => destination = self.next_free_name(&destination),
                CollisionPolicy::Skip => return Err(RecordError::Collision { destination }),
            }
        }

        move_file(source, &destination).map_err(|e| RecordError::Relocate {
            path: source.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            "Record relocated"
        );

        Ok(destination)
    }

    /// Finds the first free `name.N.ext` destination for a taken name.
    fn next_free_name(&self, destination: &Path) -> PathBuf {
        let stem = destination
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("record");
        let extension = destination.extension().and_then(|s| s.to_str());

        let mut n: u32 = 1;
        loop {
            let candidate = match extension {
                Some(ext) => self.path.join(format!("{stem}.{n}.{ext}")),
                None => self.path.join(format!("{stem}.{n}")),
            };
            if !candidate.exists() {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Moves a file by rename, falling back to copy-then-remove when the rename
/// fails (renames cannot cross filesystem boundaries).
fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(source, destination)?;
            fs::remove_file(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("deep").join("quarantine");

        let quarantine = QuarantineDir::open(&target).unwrap();
        assert!(target.is_dir());
        assert_eq!(quarantine.path(), target);
    }

    #[test]
    fn test_relocate_preserves_filename() {
        let source_dir = TempDir::new().unwrap();
        let quarantine_dir = TempDir::new().unwrap();
        let quarantine = QuarantineDir::open(quarantine_dir.path()).unwrap();

        let source = write_file(source_dir.path(), "b.json", "{\"poem\": \"\"}");
        let destination = quarantine
            .relocate(&source, CollisionPolicy::Overwrite)
            .unwrap();

        assert!(!source.exists());
        assert_eq!(destination, quarantine_dir.path().join("b.json"));
        assert_eq!(
            fs::read_to_string(destination).unwrap(),
            "{\"poem\": \"\"}"
        );
    }

    #[test]
    fn test_relocate_collision_overwrite() {
        let source_dir = TempDir::new().unwrap();
        let quarantine_dir = TempDir::new().unwrap();
        let quarantine = QuarantineDir::open(quarantine_dir.path()).unwrap();

        write_file(quarantine_dir.path(), "b.json", "old");
        let source = write_file(source_dir.path(), "b.json", "new");

        let destination = quarantine
            .relocate(&source, CollisionPolicy::Overwrite)
            .unwrap();
        assert_eq!(fs::read_to_string(destination).unwrap(), "new");
    }

    #[test]
    fn test_relocate_collision_rename() {
        let source_dir = TempDir::new().unwrap();
        let quarantine_dir = TempDir::new().unwrap();
        let quarantine = QuarantineDir::open(quarantine_dir.path()).unwrap();

        write_file(quarantine_dir.path(), "b.json", "first");
        write_file(quarantine_dir.path(), "b.1.json", "second");
        let source = write_file(source_dir.path(), "b.json", "third");

        let destination = quarantine
            .relocate(&source, CollisionPolicy::Rename)
            .unwrap();
        assert_eq!(destination, quarantine_dir.path().join("b.2.json"));
        assert_eq!(fs::read_to_string(destination).unwrap(), "third");
        assert_eq!(
            fs::read_to_string(quarantine_dir.path().join("b.json")).unwrap(),
            "first"
        );
    }

    #[test]
    fn test_relocate_collision_skip() {
        let source_dir = TempDir::new().unwrap();
        let quarantine_dir = TempDir::new().unwrap();
        let quarantine = QuarantineDir::open(quarantine_dir.path()).unwrap();

        write_file(quarantine_dir.path(), "b.json", "occupied");
        let source = write_file(source_dir.path(), "b.json", "incoming");

        let err = quarantine
            .relocate(&source, CollisionPolicy::Skip)
            .unwrap_err();
        assert!(matches!(err, RecordError::Collision { .. }));
        assert!(source.exists());
    }
}
