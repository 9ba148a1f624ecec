//! Stale-file name patterns.
//!
//! Cleanup only ever touches files that look generated. Anything else in the
//! artifact directories (readmes, icons, hand-written pages with other
//! naming) is outside this tool's ownership and left alone. Matching is
//! case-insensitive so renamed-case leftovers still get cleaned up.

use regex::Regex;

/// Whether a file name looks like a generated manifest.
pub fn matches_manifest_pattern(name: &str) -> bool {
    Regex::new(r"(?i)^manifest-[a-z0-9_-]+\.json$")
        .expect("invalid regex")
        .is_match(name)
}

/// Whether a file name looks like a generated installer page.
///
/// The index page matches this pattern structurally; the planner exempts it
/// explicitly.
pub fn matches_installer_pattern(name: &str) -> bool {
    Regex::new(r"(?i)^[a-z0-9_-]+\.html$")
        .expect("invalid regex")
        .is_match(name)
}
