//! Club identity primitives for OrgHub artifact generation.
//!
//! A club arrives as an untrusted JSON record and leaves as a [`Club`] with a
//! validated [`ClubSlug`] and fully defaulted display fields. Records whose
//! identifier normalizes to nothing are excluded here, before any artifact
//! naming can depend on them.
//!
#![deny(missing_docs)]

/// Normalized club value type and projection.
pub mod club;
/// Raw remote record shape and scalar coercion.
pub mod record;
/// Slug newtype and identifier normalization.
pub mod slug;
/// Validation helpers used by club primitives.
pub mod validation;

pub use club::{project, project_all, Club, ClubDefaults};
pub use record::{coerce_field, RawClubRecord};
pub use slug::ClubSlug;
pub use validation::ValidationError;
