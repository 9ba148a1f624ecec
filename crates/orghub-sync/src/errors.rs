//! Error types for sync operations.

use crate::apply::SyncReport;
use crate::plan::FileTarget;
use orghub_artifact::RenderError;
use orghub_store::{ArtifactKind, StoreError};
use std::fmt;
use thiserror::Error;

/// What a failed store operation was doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpAction {
    /// Deleting an orphan file.
    Delete,
    /// Writing (or content-checking) a desired file.
    Write,
}

impl fmt::Display for OpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpAction::Delete => write!(f, "delete"),
            OpAction::Write => write!(f, "write"),
        }
    }
}

/// A single store operation that failed during apply.
#[derive(Debug)]
pub struct FailedOp {
    /// What the operation was doing.
    pub action: OpAction,
    /// Which directory the file lives in.
    pub kind: ArtifactKind,
    /// File name the operation targeted.
    pub name: String,
    /// Underlying store error.
    pub error: StoreError,
}

impl FailedOp {
    pub(crate) fn new(action: OpAction, target: &FileTarget, error: StoreError) -> Self {
        Self {
            action,
            kind: target.kind,
            name: target.name.clone(),
            error,
        }
    }
}

impl fmt::Display for FailedOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.action, self.name, self.error)
    }
}

/// Aggregate failure from a best-effort apply.
///
/// Every operation in the plan was attempted; these are the ones that did
/// not go through.
#[derive(Debug)]
pub struct PartialFailure {
    /// Failed operations, in execution order.
    pub failed: Vec<FailedOp>,
    /// Counters for the operations that did succeed.
    pub report: SyncReport,
}

impl fmt::Display for PartialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sync operation(s) failed", self.failed.len())?;
        if let Some(first) = self.failed.first() {
            write!(f, "; first: {}", first)?;
        }
        Ok(())
    }
}

/// Errors that can occur while reconciling.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Rendering a document failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    /// Listing the existing files failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Some operations failed; the rest of the batch still ran.
    #[error("{0}")]
    Partial(PartialFailure),
}
