//! On-disk reconciliation against real directories.

use orghub_artifact::RenderConfig;
use orghub_club::{Club, ClubSlug};
use orghub_store::{ArtifactStore, DirStore};
use orghub_sync::{apply, plan, ExistingFiles};
use tempfile::TempDir;

fn club(slug: &str, name: &str) -> Club {
    Club {
        slug: ClubSlug::parse(slug).unwrap(),
        name: name.to_string(),
        short_name: name.to_string(),
        theme_color: "#F47B20".to_string(),
        background_color: "#0B1E3F".to_string(),
    }
}

fn run(clubs: &[Club], store: &mut dyn ArtifactStore) -> orghub_sync::SyncReport {
    let existing = ExistingFiles::capture(store).unwrap();
    let p = plan(clubs, &RenderConfig::default(), &existing).unwrap();
    apply(&p, store).unwrap()
}

#[test]
fn reconciliation_on_disk_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let manifests = temp.path().join("manifests");
    let install = temp.path().join("install");
    let mut store = DirStore::new(&manifests, &install);

    let clubs = vec![club("fc-nord", "FC Nord"), club("ks-zenit", "KS Zenit")];
    let first = run(&clubs, &mut store);
    assert_eq!(first.written, 5);

    assert!(manifests.join("manifest-fc-nord.json").exists());
    assert!(manifests.join("manifest-ks-zenit.json").exists());
    assert!(install.join("fc-nord.html").exists());
    assert!(install.join("ks-zenit.html").exists());
    assert!(install.join("index.html").exists());

    let second = run(&clubs, &mut store);
    assert_eq!(second.written, 0);
    assert_eq!(second.deleted, 0);
    assert_eq!(second.unchanged, 5);
}

#[test]
fn stale_files_on_disk_are_removed() {
    let temp = TempDir::new().unwrap();
    let manifests = temp.path().join("manifests");
    let install = temp.path().join("install");
    let mut store = DirStore::new(&manifests, &install);

    run(&[club("a", "A"), club("b", "B")], &mut store);
    run(&[club("a", "A")], &mut store);

    assert!(manifests.join("manifest-a.json").exists());
    assert!(!manifests.join("manifest-b.json").exists());
    assert!(install.join("a.html").exists());
    assert!(!install.join("b.html").exists());
    assert!(install.join("index.html").exists());
}
