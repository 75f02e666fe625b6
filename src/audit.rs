//! Structured audit logging for sweep runs.
//!
//! This module provides functions for emitting structured audit events
//! using the `tracing` crate. Events carry a dedicated `poemsweep::audit`
//! target so any subscriber can route them separately from diagnostics
//! (JSON file, pipeline log collector, etc.).

use crate::sweep::{Disposition, SweepReport};

use std::path::Path;

/// Emits an audit event for a sweep starting.
pub fn emit_sweep_started(
    run_id: &str,
    source_dir: &Path,
    quarantine_dir: &Path,
    candidates: usize,
) {
    tracing::info!(
        target: "poemsweep::audit",
        event_type = "sweep_started",
        run_id = %run_id,
        source_dir = %source_dir.display(),
        quarantine_dir = %quarantine_dir.display(),
        candidates,
        "Sweep started"
    );
}

/// Emits an audit event for one handled record file.
pub fn emit_record_swept(run_id: &str, filename: &str, disposition: &Disposition) {
    let disposition_str = match disposition {
        Disposition::Kept => "kept",
        Disposition::Quarantined { .. } => "quarantined",
        Disposition::Malformed { .. } => "malformed",
        Disposition::Failed { .. } => "failed",
    };

    let destination = match disposition {
        Disposition::Quarantined { destination } => Some(destination.display().to_string()),
        _ => None,
    };

    let reason = match disposition {
        Disposition::Malformed { reason } | Disposition::Failed { reason } => Some(reason.as_str()),
        _ => None,
    };

    tracing::info!(
        target: "poemsweep::audit",
        event_type = "record_swept",
        run_id = %run_id,
        filename = %filename,
        disposition = %disposition_str,
        destination = ?destination,
        reason = ?reason,
        "Record swept"
    );
}

/// Emits an audit event for a completed sweep.
pub fn emit_sweep_completed(report: &SweepReport) {
    tracing::info!(
        target: "poemsweep::audit",
        event_type = "sweep_completed",
        run_id = %report.id,
        scanned = report.scanned,
        quarantined = report.quarantined,
        kept = report.kept,
        malformed = report.malformed,
        failed = report.failed,
        duration_ms = report.duration.as_millis() as u64,
        "Sweep completed"
    );
}
