//! PWA manifest document.

use crate::config::RenderConfig;
use orghub_club::Club;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error that can occur when rendering a manifest.
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Icon declaration inside a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    /// Icon path relative to the site root.
    pub src: String,
    /// Pixel dimensions, e.g. `192x192`.
    pub sizes: String,
    /// MIME type.
    #[serde(rename = "type")]
    pub icon_type: String,
    /// Intended purposes, space separated.
    pub purpose: String,
}

/// Installable web app manifest for one club.
///
/// Field declaration order is the serialization order; golden tests depend
/// on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Stable application identifier.
    pub id: String,
    /// Human-readable application name.
    pub name: String,
    /// Short name shown under the icon.
    pub short_name: String,
    /// URL opened on launch; encodes the club slug.
    pub start_url: String,
    /// Navigation scope.
    pub scope: String,
    /// Display mode.
    pub display: String,
    /// Screen orientation.
    pub orientation: String,
    /// Splash background color.
    pub background_color: String,
    /// Browser chrome theme color.
    pub theme_color: String,
    /// Human-readable description.
    pub description: String,
    /// Declared icons.
    pub icons: Vec<ManifestIcon>,
    /// Language tag.
    pub lang: String,
    /// Text direction.
    pub dir: String,
}

/// Builds the manifest document for a club.
pub fn manifest_for(club: &Club, config: &RenderConfig) -> Manifest {
    Manifest {
        id: format!("{}{}", config.app_id_prefix, club.slug),
        name: format!("{} – {}", config.product_name, club.name),
        short_name: club.short_name.clone(),
        start_url: format!("/#clubId={}", club.slug),
        scope: config.scope.clone(),
        display: config.display.clone(),
        orientation: config.orientation.clone(),
        background_color: club.background_color.clone(),
        theme_color: club.theme_color.clone(),
        description: format!(
            "Panel klubu {} w systemie {}.",
            club.name, config.product_name
        ),
        icons: config.icons.clone(),
        lang: config.lang.clone(),
        dir: config.dir.clone(),
    }
}

/// Renders the manifest to its on-disk form.
///
/// Pretty-printed with two-space indentation plus a trailing newline so the
/// file stays human-diffable and byte-stable across runs.
pub fn render_manifest(club: &Club, config: &RenderConfig) -> Result<String, RenderError> {
    let manifest = manifest_for(club, config);
    let mut text = serde_json::to_string_pretty(&manifest)?;
    text.push('\n');
    Ok(text)
}
