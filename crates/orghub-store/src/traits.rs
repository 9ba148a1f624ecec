//! Storage trait and artifact kinds.

use crate::error::StoreError;

/// Kind of generated artifact, selecting the directory it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// PWA manifest documents.
    Manifest,
    /// Installer pages, including the index.
    Installer,
}

/// Storage collaborator owning the generated artifact directories.
///
/// Names are plain file names without path separators; the caller guarantees
/// this via its naming scheme. Implementations never interpret content.
pub trait ArtifactStore {
    /// Lists file names currently present for a kind.
    ///
    /// A kind whose backing directory does not exist yet lists as empty.
    fn list(&self, kind: ArtifactKind) -> Result<Vec<String>, StoreError>;

    /// Reads a file's content, or `None` when it does not exist.
    fn read(&self, kind: ArtifactKind, name: &str) -> Result<Option<String>, StoreError>;

    /// Writes a file, replacing any previous content.
    fn write(&mut self, kind: ArtifactKind, name: &str, content: &str) -> Result<(), StoreError>;

    /// Removes a file. Removing a missing file is an error.
    fn remove(&mut self, kind: ArtifactKind, name: &str) -> Result<(), StoreError>;
}
