//! Deterministic artifact file names.

use orghub_club::ClubSlug;

/// File name of the always-preserved installer index page.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Manifest file name for a club.
pub fn manifest_file_name(slug: &ClubSlug) -> String {
    format!("manifest-{}.json", slug)
}

/// Installer page file name for a club.
pub fn installer_file_name(slug: &ClubSlug) -> String {
    format!("{}.html", slug)
}
