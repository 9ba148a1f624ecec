//! Artifact storage boundary for OrgHub PWA generation.
//!
//! This crate provides:
//! - `ArtifactStore` trait for listing, reading, writing and removing
//!   generated artifacts
//! - Directory-backed implementation used by the CLI
//! - In-memory implementation for tests and dry staging
//!
//! The reconciler owns the artifact directories for file names matching its
//! naming scheme; stores never interpret content.
//!
#![deny(missing_docs)]

/// Directory-backed store.
pub mod dir;
/// Error types for store operations.
pub mod error;
/// In-memory store.
pub mod memory;
/// Storage trait and artifact kinds.
pub mod traits;

pub use dir::DirStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use traits::{ArtifactKind, ArtifactStore};
