//! Artifact renderers for OrgHub club PWAs.
//!
//! Rendering is pure and deterministic: the same club and configuration
//! always produce the same bytes. The reconciler's idempotent-write check is
//! a byte-for-byte comparison against what is already on disk, so nothing in
//! this crate may depend on timestamps, randomness, or locale.
//!
#![deny(missing_docs)]

/// Fixed rendering configuration.
pub mod config;
/// HTML escaping for untrusted club fields.
pub mod escape;
/// PWA manifest document.
pub mod manifest;
/// Deterministic artifact file names.
pub mod naming;
/// Installer and index pages.
pub mod pages;

pub use config::RenderConfig;
pub use escape::escape_html;
pub use manifest::{manifest_for, render_manifest, Manifest, ManifestIcon, RenderError};
pub use pages::{render_index, render_installer};
