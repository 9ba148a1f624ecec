use serde::Deserialize;
use serde_json::Value;

/// Raw club record as delivered by the remote list.
///
/// Every field is optional and may carry any JSON value; consumers coerce
/// scalars with [`coerce_field`]. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawClubRecord {
    /// Raw club identifier, normalized into a [`ClubSlug`](crate::ClubSlug).
    #[serde(rename = "clubId")]
    pub club_id: Option<Value>,
    /// Display name.
    pub name: Option<Value>,
    /// Short display name.
    #[serde(rename = "shortName")]
    pub short_name: Option<Value>,
    /// Manifest theme color.
    #[serde(rename = "themeColor")]
    pub theme_color: Option<Value>,
    /// Manifest background color.
    #[serde(rename = "backgroundColor")]
    pub background_color: Option<Value>,
}

impl RawClubRecord {
    /// Builds a record from an arbitrary JSON value.
    ///
    /// Non-object values produce an empty record, which projection drops.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// Coerces an optional JSON value to a trimmed, non-empty string.
///
/// Strings are kept, numbers and booleans are rendered with their JSON text,
/// everything else yields `None`. Values that trim to the empty string also
/// yield `None` so fallback chains can continue past them.
pub fn coerce_field(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
