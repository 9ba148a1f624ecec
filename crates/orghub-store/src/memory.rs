//! In-memory artifact store.

use crate::error::StoreError;
use crate::traits::{ArtifactKind, ArtifactStore};
use std::collections::BTreeMap;

/// Artifact store kept entirely in memory.
///
/// Backs reconciler unit tests; listing order is name order, matching the
/// sorted listing of the directory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    manifests: BTreeMap<String, String>,
    installers: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files across both kinds.
    pub fn len(&self) -> usize {
        self.manifests.len() + self.installers.len()
    }

    /// Whether the store holds no files.
    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty() && self.installers.is_empty()
    }

    fn map(&self, kind: ArtifactKind) -> &BTreeMap<String, String> {
        match kind {
            ArtifactKind::Manifest => &self.manifests,
            ArtifactKind::Installer => &self.installers,
        }
    }

    fn map_mut(&mut self, kind: ArtifactKind) -> &mut BTreeMap<String, String> {
        match kind {
            ArtifactKind::Manifest => &mut self.manifests,
            ArtifactKind::Installer => &mut self.installers,
        }
    }
}

impl ArtifactStore for MemoryStore {
    fn list(&self, kind: ArtifactKind) -> Result<Vec<String>, StoreError> {
        Ok(self.map(kind).keys().cloned().collect())
    }

    fn read(&self, kind: ArtifactKind, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map(kind).get(name).cloned())
    }

    fn write(&mut self, kind: ArtifactKind, name: &str, content: &str) -> Result<(), StoreError> {
        self.map_mut(kind)
            .insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn remove(&mut self, kind: ArtifactKind, name: &str) -> Result<(), StoreError> {
        match self.map_mut(kind).remove(name) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }
}
