//! Plan computation.

use crate::patterns;
use orghub_artifact::naming;
use orghub_artifact::{render_index, render_installer, render_manifest, RenderConfig, RenderError};
use orghub_club::Club;
use orghub_store::{ArtifactKind, ArtifactStore, StoreError};
use std::collections::BTreeSet;

/// One file a plan deletes or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    /// Which directory the file lives in.
    pub kind: ArtifactKind,
    /// Plain file name inside that directory.
    pub name: String,
}

/// Desired write: target plus the full rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    /// Target file.
    pub target: FileTarget,
    /// Content the file must end up with.
    pub content: String,
}

/// Full set of changes reconciling the artifact directories with a club list.
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    /// Orphan files to delete, manifests first.
    pub deletes: Vec<FileTarget>,
    /// Files whose content must match the rendered output, in club order,
    /// index last.
    pub writes: Vec<PlannedWrite>,
}

/// File names currently present, per kind.
#[derive(Debug, Clone, Default)]
pub struct ExistingFiles {
    /// Names in the manifests directory.
    pub manifests: Vec<String>,
    /// Names in the install directory.
    pub installers: Vec<String>,
}

impl ExistingFiles {
    /// Captures the current listing from a store.
    pub fn capture(store: &dyn ArtifactStore) -> Result<Self, StoreError> {
        Ok(Self {
            manifests: store.list(ArtifactKind::Manifest)?,
            installers: store.list(ArtifactKind::Installer)?,
        })
    }
}

/// Computes the reconciliation plan for a fresh club list.
///
/// Deletions cover every existing file that matches a generated-name pattern
/// but belongs to no club in the list; [`naming::INDEX_FILE_NAME`] is never
/// a deletion candidate. Writes cover each club's manifest and installer
/// plus the index. Pure: no I/O happens here.
pub fn plan(
    clubs: &[Club],
    config: &RenderConfig,
    existing: &ExistingFiles,
) -> Result<SyncPlan, RenderError> {
    let target_manifests: BTreeSet<String> = clubs
        .iter()
        .map(|c| naming::manifest_file_name(&c.slug))
        .collect();
    let target_installers: BTreeSet<String> = clubs
        .iter()
        .map(|c| naming::installer_file_name(&c.slug))
        .collect();

    let mut deletes = Vec::new();
    for name in &existing.manifests {
        if patterns::matches_manifest_pattern(name) && !target_manifests.contains(name) {
            deletes.push(FileTarget {
                kind: ArtifactKind::Manifest,
                name: name.clone(),
            });
        }
    }
    for name in &existing.installers {
        if name == naming::INDEX_FILE_NAME {
            continue;
        }
        if patterns::matches_installer_pattern(name) && !target_installers.contains(name) {
            deletes.push(FileTarget {
                kind: ArtifactKind::Installer,
                name: name.clone(),
            });
        }
    }

    let mut writes = Vec::new();
    for club in clubs {
        writes.push(PlannedWrite {
            target: FileTarget {
                kind: ArtifactKind::Manifest,
                name: naming::manifest_file_name(&club.slug),
            },
            content: render_manifest(club, config)?,
        });
        writes.push(PlannedWrite {
            target: FileTarget {
                kind: ArtifactKind::Installer,
                name: naming::installer_file_name(&club.slug),
            },
            content: render_installer(club, config),
        });
    }
    writes.push(PlannedWrite {
        target: FileTarget {
            kind: ArtifactKind::Installer,
            name: naming::INDEX_FILE_NAME.to_string(),
        },
        content: render_index(clubs, config),
    });

    Ok(SyncPlan { deletes, writes })
}
