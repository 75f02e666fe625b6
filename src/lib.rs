//! # Poemsweep
//!
//! A batch hygiene tool for poem-corpus datasets: it sweeps a directory of
//! JSON record files, finds records whose `"poem"` field carries no content,
//! and relocates those files into a quarantine directory for later review.
//!
//! ## Overview
//!
//! A sweep is a single sequential pass over a source directory:
//!
//! - List the record files (entries with the configured extension)
//! - Parse each file as a JSON object
//! - Test the poem-content predicate
//! - Relocate empty records into the quarantine directory
//! - Produce a [`SweepReport`] with per-file dispositions and final counts
//!
//! Files with poem content are never touched; quarantined files keep their
//! filename. Setup failures (missing source directory, uncreatable
//! quarantine directory) abort before any file is processed, while per-file
//! failures are isolated according to the configured policies.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use poemsweep::{SweepConfig, Sweeper};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SweepConfig::new("corpus_finished", "quarantine");
//!     let report = Sweeper::new(config).run()?;
//!
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into a few small layers:
//!
//! - **Core**: record parsing, the poem-content predicate, and error types
//! - **Config**: sweep parameters and the malformed/collision policies
//! - **Quarantine**: the destination directory and file relocation
//! - **Sweep**: the sequential pass and its report
//! - **Audit**: structured `tracing` events for every sweep action

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod audit;
pub mod config;
pub mod core;
pub mod quarantine;
pub mod sweep;

// Re-export commonly used types at the crate root
pub use crate::config::{CollisionPolicy, MalformedPolicy, SweepConfig};
pub use crate::core::{is_empty_poem, RecordDocument, RecordError, SweepError};
pub use crate::quarantine::QuarantineDir;
pub use crate::sweep::{Disposition, FileEntry, SweepReport, Sweeper};

/// Prelude module for convenient imports.
///
/// ```rust
/// use poemsweep::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{CollisionPolicy, MalformedPolicy, SweepConfig};
    pub use crate::core::{is_empty_poem, RecordDocument, RecordError, SweepError};
    pub use crate::quarantine::QuarantineDir;
    pub use crate::sweep::{Disposition, FileEntry, SweepReport, Sweeper};
}
