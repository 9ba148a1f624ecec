//! Reconciliation engine turning a fresh club list into filesystem changes.
//!
//! The engine is split the way it is tested: [`plan`] is a pure function
//! computing every deletion and desired write from the current club list and
//! a directory listing, and [`apply`] executes a plan against an
//! [`ArtifactStore`](orghub_store::ArtifactStore), skipping writes whose
//! target already holds identical content. Stale-file deletion is always
//! computed from the freshly fetched list, never from cached state.
//!
#![deny(missing_docs)]

/// Plan application.
pub mod apply;
/// Error types for sync operations.
pub mod errors;
/// Stale-file name patterns.
pub mod patterns;
/// Plan computation.
pub mod plan;
/// Remote payload validation.
pub mod source;

pub use apply::{apply, SyncReport};
pub use errors::{FailedOp, OpAction, PartialFailure, SyncError};
pub use plan::{plan, ExistingFiles, FileTarget, PlannedWrite, SyncPlan};
pub use source::{parse_club_list, SourceError};
