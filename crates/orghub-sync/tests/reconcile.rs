//! Plan/apply behavior: idempotence, cleanup, index preservation, failures.

use orghub_artifact::RenderConfig;
use orghub_club::{project_all, Club, ClubDefaults, ClubSlug, RawClubRecord};
use orghub_store::{ArtifactKind, ArtifactStore, MemoryStore, StoreError};
use orghub_sync::{apply, plan, ExistingFiles, SyncError};

fn club(slug: &str) -> Club {
    Club {
        slug: ClubSlug::parse(slug).unwrap(),
        name: slug.to_uppercase(),
        short_name: slug.to_uppercase(),
        theme_color: "#F47B20".to_string(),
        background_color: "#0B1E3F".to_string(),
    }
}

fn reconcile(clubs: &[Club], store: &mut dyn ArtifactStore) -> Result<orghub_sync::SyncReport, SyncError> {
    let existing = ExistingFiles::capture(store)?;
    let plan = plan(clubs, &RenderConfig::default(), &existing)?;
    apply(&plan, store)
}

#[test]
fn plan_writes_two_artifacts_per_club_plus_index() {
    let clubs = vec![club("alpha"), club("beta")];
    let p = plan(&clubs, &RenderConfig::default(), &ExistingFiles::default()).unwrap();

    assert!(p.deletes.is_empty());
    assert_eq!(p.writes.len(), 5);

    let names: Vec<(ArtifactKind, &str)> = p
        .writes
        .iter()
        .map(|w| (w.target.kind, w.target.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            (ArtifactKind::Manifest, "manifest-alpha.json"),
            (ArtifactKind::Installer, "alpha.html"),
            (ArtifactKind::Manifest, "manifest-beta.json"),
            (ArtifactKind::Installer, "beta.html"),
            (ArtifactKind::Installer, "index.html"),
        ]
    );
}

#[test]
fn plan_deletes_only_generated_looking_orphans() {
    let existing = ExistingFiles {
        manifests: vec![
            "manifest-alpha.json".to_string(),
            "manifest-gone.json".to_string(),
            "MANIFEST-SHOUT.JSON".to_string(),
            "README.md".to_string(),
            "manifest-.json".to_string(),
        ],
        installers: vec![
            "alpha.html".to_string(),
            "gone.html".to_string(),
            "index.html".to_string(),
            "notes.txt".to_string(),
        ],
    };
    let p = plan(&[club("alpha")], &RenderConfig::default(), &existing).unwrap();

    let deleted: Vec<&str> = p.deletes.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(deleted, vec!["manifest-gone.json", "MANIFEST-SHOUT.JSON", "gone.html"]);
}

#[test]
fn index_is_never_a_deletion_candidate() {
    let existing = ExistingFiles {
        manifests: vec![],
        installers: vec!["index.html".to_string(), "orphan.html".to_string()],
    };
    let p = plan(&[], &RenderConfig::default(), &existing).unwrap();

    let deleted: Vec<&str> = p.deletes.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(deleted, vec!["orphan.html"]);
    // The index is still rewritten (content-compared) every run.
    assert_eq!(p.writes.len(), 1);
    assert_eq!(p.writes[0].target.name, "index.html");
}

#[test]
fn second_run_with_unchanged_input_writes_nothing() {
    let clubs = vec![club("alpha"), club("beta")];
    let mut store = MemoryStore::new();

    let first = reconcile(&clubs, &mut store).unwrap();
    assert_eq!(first.written, 5);
    assert_eq!(first.deleted, 0);
    assert_eq!(first.unchanged, 0);

    let second = reconcile(&clubs, &mut store).unwrap();
    assert_eq!(second.written, 0);
    assert_eq!(second.deleted, 0);
    assert_eq!(second.unchanged, 5);
}

#[test]
fn removed_clubs_lose_their_files_and_survivors_keep_them() {
    let mut store = MemoryStore::new();
    reconcile(&[club("a"), club("b"), club("c")], &mut store).unwrap();
    assert!(store
        .read(ArtifactKind::Manifest, "manifest-b.json")
        .unwrap()
        .is_some());

    let report = reconcile(&[club("a"), club("c")], &mut store).unwrap();
    assert_eq!(report.deleted, 2);

    assert!(store
        .read(ArtifactKind::Manifest, "manifest-b.json")
        .unwrap()
        .is_none());
    assert!(store.read(ArtifactKind::Installer, "b.html").unwrap().is_none());
    for slug in ["a", "c"] {
        assert!(store
            .read(ArtifactKind::Manifest, &format!("manifest-{slug}.json"))
            .unwrap()
            .is_some());
        assert!(store
            .read(ArtifactKind::Installer, &format!("{slug}.html"))
            .unwrap()
            .is_some());
    }
    assert!(store
        .read(ArtifactKind::Installer, "index.html")
        .unwrap()
        .is_some());
}

#[test]
fn emptied_list_cleans_everything_but_the_index() {
    let mut store = MemoryStore::new();
    reconcile(&[club("a"), club("b")], &mut store).unwrap();

    reconcile(&[], &mut store).unwrap();
    assert!(store.list(ArtifactKind::Manifest).unwrap().is_empty());
    assert_eq!(
        store.list(ArtifactKind::Installer).unwrap(),
        vec!["index.html".to_string()]
    );
}

#[test]
fn foreign_files_survive_reconciliation() {
    let mut store = MemoryStore::new();
    store
        .write(ArtifactKind::Manifest, "README.md", "docs")
        .unwrap();
    store
        .write(ArtifactKind::Installer, "icon-192.png", "binaryish")
        .unwrap();

    reconcile(&[club("a")], &mut store).unwrap();

    assert_eq!(
        store.read(ArtifactKind::Manifest, "README.md").unwrap(),
        Some("docs".to_string())
    );
    assert!(store
        .read(ArtifactKind::Installer, "icon-192.png")
        .unwrap()
        .is_some());
}

#[test]
fn end_to_end_scenario_from_raw_records() {
    let records: Vec<RawClubRecord> = [serde_json::json!({"clubId": "FC Nord!", "name": "FC Nord"})]
        .iter()
        .map(RawClubRecord::from_value)
        .collect();
    let clubs = project_all(&records, &ClubDefaults::default());
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].slug.as_ref(), "fc-nord");

    let mut store = MemoryStore::new();
    reconcile(&clubs, &mut store).unwrap();

    let manifest = store
        .read(ArtifactKind::Manifest, "manifest-fc-nord.json")
        .unwrap()
        .unwrap();
    assert!(manifest.contains(r#""id": "orghub-fc-nord""#));
    assert!(manifest.contains(r#""short_name": "FC Nord""#));
    assert!(manifest.contains(r##""theme_color": "#F47B20""##));
    assert!(manifest.contains(r##""background_color": "#0B1E3F""##));

    let installer = store
        .read(ArtifactKind::Installer, "fc-nord.html")
        .unwrap()
        .unwrap();
    assert!(installer.contains("/manifests/manifest-fc-nord.json"));
    assert!(installer.contains("FC Nord"));

    let index = store
        .read(ArtifactKind::Installer, "index.html")
        .unwrap()
        .unwrap();
    assert!(index.contains(r#"<a href="/install/fc-nord.html">FC Nord</a>"#));
    assert_eq!(index.matches("<li>").count(), 1);
}

/// Store that fails writes to one specific file name.
struct FailingStore {
    inner: MemoryStore,
    fail_on: String,
}

impl ArtifactStore for FailingStore {
    fn list(&self, kind: ArtifactKind) -> Result<Vec<String>, StoreError> {
        self.inner.list(kind)
    }
    fn read(&self, kind: ArtifactKind, name: &str) -> Result<Option<String>, StoreError> {
        self.inner.read(kind, name)
    }
    fn write(&mut self, kind: ArtifactKind, name: &str, content: &str) -> Result<(), StoreError> {
        if name == self.fail_on {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )));
        }
        self.inner.write(kind, name, content)
    }
    fn remove(&mut self, kind: ArtifactKind, name: &str) -> Result<(), StoreError> {
        self.inner.remove(kind, name)
    }
}

#[test]
fn apply_continues_past_failures_and_reports_them() {
    let clubs = vec![club("a"), club("b")];
    let mut store = FailingStore {
        inner: MemoryStore::new(),
        fail_on: "a.html".to_string(),
    };

    let err = reconcile(&clubs, &mut store).unwrap_err();
    let partial = match err {
        SyncError::Partial(partial) => partial,
        other => panic!("expected Partial, got {other:?}"),
    };
    assert_eq!(partial.failed.len(), 1);
    assert_eq!(partial.failed[0].name, "a.html");
    assert_eq!(partial.report.written, 4);

    // Everything except the failing file landed.
    assert!(store
        .inner
        .read(ArtifactKind::Manifest, "manifest-a.json")
        .unwrap()
        .is_some());
    assert!(store
        .inner
        .read(ArtifactKind::Manifest, "manifest-b.json")
        .unwrap()
        .is_some());
    assert!(store
        .inner
        .read(ArtifactKind::Installer, "index.html")
        .unwrap()
        .is_some());
    assert!(store.inner.read(ArtifactKind::Installer, "a.html").unwrap().is_none());
}
