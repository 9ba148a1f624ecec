use crate::record::{coerce_field, RawClubRecord};
use crate::slug::ClubSlug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback values applied during projection.
///
/// Carried as an explicit struct rather than scattered literals so tests can
/// substitute their own palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubDefaults {
    /// Theme color used when a record does not carry one.
    pub theme_color: String,
    /// Background color used when a record does not carry one.
    pub background_color: String,
}

impl Default for ClubDefaults {
    fn default() -> Self {
        Self {
            theme_color: "#F47B20".to_string(),
            background_color: "#0B1E3F".to_string(),
        }
    }
}

/// Normalized club, the unit every artifact is derived from.
///
/// Immutable once projected; every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Canonical identifier; artifact file names derive from it.
    pub slug: ClubSlug,
    /// Display name; falls back to the slug.
    pub name: String,
    /// Short display name; falls back to `name`, then the slug.
    pub short_name: String,
    /// Manifest theme color.
    pub theme_color: String,
    /// Manifest background color.
    pub background_color: String,
}

/// Projects one raw record into a normalized club.
///
/// Returns `None` when the raw identifier normalizes to nothing. Performs no
/// I/O and cannot panic for any well-formed JSON input; malformed scalar
/// types are coerced to strings rather than rejected.
pub fn project(raw: &RawClubRecord, defaults: &ClubDefaults) -> Option<Club> {
    let raw_id = coerce_field(raw.club_id.as_ref())?;
    let slug = ClubSlug::normalize(&raw_id)?;

    let name = coerce_field(raw.name.as_ref()).unwrap_or_else(|| slug.to_string());
    let short_name = coerce_field(raw.short_name.as_ref()).unwrap_or_else(|| name.clone());
    let theme_color =
        coerce_field(raw.theme_color.as_ref()).unwrap_or_else(|| defaults.theme_color.clone());
    let background_color = coerce_field(raw.background_color.as_ref())
        .unwrap_or_else(|| defaults.background_color.clone());

    Some(Club {
        slug,
        name,
        short_name,
        theme_color,
        background_color,
    })
}

/// Projects a batch of raw records into the working set.
///
/// Records without a usable identifier are dropped. When two records share a
/// slug the later record's fields win but the club keeps the list position of
/// the first occurrence, matching object-key semantics of the upstream list.
pub fn project_all(records: &[RawClubRecord], defaults: &ClubDefaults) -> Vec<Club> {
    let mut clubs: Vec<Club> = Vec::with_capacity(records.len());
    let mut by_slug: HashMap<ClubSlug, usize> = HashMap::new();

    for raw in records {
        let club = match project(raw, defaults) {
            Some(club) => club,
            None => continue,
        };
        match by_slug.get(&club.slug) {
            Some(&idx) => clubs[idx] = club,
            None => {
                by_slug.insert(club.slug.clone(), clubs.len());
                clubs.push(club);
            }
        }
    }

    clubs
}
