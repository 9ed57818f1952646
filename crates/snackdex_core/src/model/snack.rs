//! Snack record domain model.
//!
//! # Responsibility
//! - Define the canonical row shape of the `japanese_snacks` table.
//! - Keep the editable field set separate from the store-assigned identity.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never mutated or reused.
//! - Field values are carried verbatim; no trimming, no default substitution.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a snack record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SnackId = i64;

/// The five editable text columns of a snack record.
///
/// This is both the insert/update payload and the controller's form buffer,
/// so selected rows can be copied into the form without field-by-field
/// mapping. Empty strings are legal values everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackFields {
    /// Display title.
    pub title: String,
    /// Japanese name.
    pub japanese: String,
    /// English name.
    pub english: String,
    /// Free-form description.
    pub description: String,
    /// Bare image file name. Composing a full URL from it is a
    /// presentation concern and stays out of this crate.
    pub image_name: String,
}

/// One persisted row: identity plus editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackRecord {
    /// Stable store-assigned ID, immutable after creation.
    pub id: SnackId,
    /// Serialized flattened to match the external column naming.
    #[serde(flatten)]
    pub fields: SnackFields,
}

impl SnackFields {
    /// Returns whether every field is the empty string.
    ///
    /// Used by the controller to assert form-buffer clearing; the store
    /// itself accepts all-empty payloads.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.japanese.is_empty()
            && self.english.is_empty()
            && self.description.is_empty()
            && self.image_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{SnackFields, SnackRecord};

    #[test]
    fn default_fields_are_empty() {
        assert!(SnackFields::default().is_empty());
    }

    #[test]
    fn record_serializes_with_flattened_columns() {
        let record = SnackRecord {
            id: 7,
            fields: SnackFields {
                title: "Pocky".to_string(),
                japanese: "ポッキー".to_string(),
                english: "Pocky".to_string(),
                description: "Chocolate stick".to_string(),
                image_name: "pocky.jpg".to_string(),
            },
        };

        let json = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Pocky");
        assert_eq!(json["image_name"], "pocky.jpg");
    }
}
