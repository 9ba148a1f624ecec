//! Directory-backed artifact store.

use crate::error::StoreError;
use crate::traits::{ArtifactKind, ArtifactStore};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Artifact store persisting under two directories on disk.
///
/// Construction touches nothing; directories are created lazily on the first
/// write, so a run that fails before mutation leaves no trace on disk.
/// Listing a kind whose directory does not exist yet returns an empty list.
#[derive(Debug)]
pub struct DirStore {
    manifests_dir: PathBuf,
    install_dir: PathBuf,
}

impl DirStore {
    /// Creates a store over the two artifact directories.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(manifests_dir: P, install_dir: Q) -> Self {
        Self {
            manifests_dir: manifests_dir.as_ref().to_path_buf(),
            install_dir: install_dir.as_ref().to_path_buf(),
        }
    }

    fn dir(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Manifest => &self.manifests_dir,
            ArtifactKind::Installer => &self.install_dir,
        }
    }
}

impl ArtifactStore for DirStore {
    fn list(&self, kind: ArtifactKind) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(self.dir(kind)) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            // Non-UTF-8 names cannot collide with generated ones; skip them.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, kind: ArtifactKind, name: &str) -> Result<Option<String>, StoreError> {
        match fs::read(self.dir(kind).join(name)) {
            Ok(bytes) => String::from_utf8(bytes).map(Some).map_err(|_| {
                StoreError::InvalidUtf8 {
                    name: name.to_string(),
                }
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, kind: ArtifactKind, name: &str, content: &str) -> Result<(), StoreError> {
        let dir = self.dir(kind);
        fs::create_dir_all(dir)?;
        fs::write(dir.join(name), content)?;
        Ok(())
    }

    fn remove(&mut self, kind: ArtifactKind, name: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.dir(kind).join(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
