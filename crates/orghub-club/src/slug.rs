use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical, filesystem- and URL-safe club identifier.
///
/// A slug is non-empty and matches `[a-z0-9_-]+`. Slugs are the keys of the
/// working set and the stem of every generated artifact file name, so they
/// never contain path separators or characters that need URL encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubSlug(String);

impl ClubSlug {
    /// Normalizes an arbitrary raw identifier into a slug.
    ///
    /// Trims surrounding whitespace, lowercases, maps every character outside
    /// `[a-z0-9_-]` to `-`, collapses runs of `-`, and strips leading and
    /// trailing `-`. Returns `None` when nothing usable remains; such a
    /// record has no identifier and cannot participate in file naming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let mut out = String::with_capacity(raw.len());
        for ch in raw.trim().chars().flat_map(char::to_lowercase) {
            let mapped = if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-'
            {
                ch
            } else {
                '-'
            };
            if mapped == '-' && out.ends_with('-') {
                continue;
            }
            out.push(mapped);
        }
        let trimmed = out.trim_matches('-');
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Parses an already-canonical slug from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Regex::new(r"^[a-z0-9_-]+$").expect("invalid regex").is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "ClubSlug",
                value: s,
            });
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ClubSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClubSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
