//! CLI command implementations.

pub mod render;
pub mod sync;

use orghub_artifact::RenderConfig;
use orghub_club::{project_all, ClubDefaults, RawClubRecord};
use orghub_store::{ArtifactKind, ArtifactStore, DirStore};
use orghub_sync::{apply, plan, ExistingFiles};

/// Projects, plans and (unless dry) applies one record set.
pub(crate) fn reconcile(
    records: Vec<RawClubRecord>,
    manifests_dir: &str,
    install_dir: &str,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let clubs = project_all(&records, &ClubDefaults::default());
    let mut store = DirStore::new(manifests_dir, install_dir);

    let existing = ExistingFiles::capture(&store)?;
    let sync_plan = plan(&clubs, &RenderConfig::default(), &existing)?;

    if dry_run {
        // Reads only; a dry run must leave the filesystem untouched.
        let mut would_write = 0;
        for target in &sync_plan.deletes {
            println!(
                "would delete {}/{}",
                dir_for(target.kind, manifests_dir, install_dir),
                target.name
            );
        }
        for write in &sync_plan.writes {
            let current = store.read(write.target.kind, &write.target.name)?;
            if current.as_deref() != Some(write.content.as_str()) {
                would_write += 1;
                println!(
                    "would write {}/{}",
                    dir_for(write.target.kind, manifests_dir, install_dir),
                    write.target.name
                );
            }
        }
        println!(
            "Plan for {} club(s): {} write(s), {} delete(s)",
            clubs.len(),
            would_write,
            sync_plan.deletes.len()
        );
        return Ok(());
    }

    let report = apply(&sync_plan, &mut store)?;
    println!(
        "Generated {} club(s): {} written, {} deleted, {} unchanged",
        clubs.len(),
        report.written,
        report.deleted,
        report.unchanged
    );
    Ok(())
}

fn dir_for<'a>(kind: ArtifactKind, manifests_dir: &'a str, install_dir: &'a str) -> &'a str {
    match kind {
        ArtifactKind::Manifest => manifests_dir,
        ArtifactKind::Installer => install_dir,
    }
}
