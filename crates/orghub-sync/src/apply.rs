//! Plan application.

use crate::errors::{FailedOp, OpAction, PartialFailure, SyncError};
use crate::plan::SyncPlan;
use orghub_store::ArtifactStore;

/// Outcome counters for an applied plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Files written because content differed or was missing.
    pub written: usize,
    /// Orphan files deleted.
    pub deleted: usize,
    /// Files already holding the desired content.
    pub unchanged: usize,
}

/// Applies a plan against a store.
///
/// Deletions run first, then writes. Each write is content-compared against
/// the store and skipped when the target already holds identical bytes,
/// which is what makes a repeated run with unchanged input mutation-free.
///
/// A failing operation does not stop the batch: every remaining operation
/// still runs, and the collected failures come back as
/// [`SyncError::Partial`] so the caller reports a failed run.
pub fn apply(plan: &SyncPlan, store: &mut dyn ArtifactStore) -> Result<SyncReport, SyncError> {
    let mut report = SyncReport::default();
    let mut failed = Vec::new();

    for target in &plan.deletes {
        match store.remove(target.kind, &target.name) {
            Ok(()) => report.deleted += 1,
            Err(e) => failed.push(FailedOp::new(OpAction::Delete, target, e)),
        }
    }

    for write in &plan.writes {
        let current = match store.read(write.target.kind, &write.target.name) {
            Ok(current) => current,
            Err(e) => {
                failed.push(FailedOp::new(OpAction::Write, &write.target, e));
                continue;
            }
        };
        if current.as_deref() == Some(write.content.as_str()) {
            report.unchanged += 1;
            continue;
        }
        match store.write(write.target.kind, &write.target.name, &write.content) {
            Ok(()) => report.written += 1,
            Err(e) => failed.push(FailedOp::new(OpAction::Write, &write.target, e)),
        }
    }

    if failed.is_empty() {
        Ok(report)
    } else {
        Err(SyncError::Partial(PartialFailure { failed, report }))
    }
}
