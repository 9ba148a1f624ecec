//! Sync command implementation.

use crate::fetch;
use orghub_sync::parse_club_list;

pub fn run(
    source_url: String,
    manifests_dir: String,
    install_dir: String,
    timeout: u64,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = fetch::fetch_club_list(&source_url, timeout)
        .map_err(|e| format!("Failed to fetch club list: {}", e))?;

    // Any shape problem aborts here, before the store is touched.
    let records = parse_club_list(&body)?;

    super::reconcile(records, &manifests_dir, &install_dir, dry_run)
}
