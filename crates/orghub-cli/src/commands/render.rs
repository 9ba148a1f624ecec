//! Render command implementation.

use orghub_sync::parse_club_list;
use std::io::{self, Read};

pub fn run(
    input: Option<String>,
    manifests_dir: String,
    install_dir: String,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read the club list payload from file or stdin
    let body = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let records = parse_club_list(&body)?;

    super::reconcile(records, &manifests_dir, &install_dir, dry_run)
}
