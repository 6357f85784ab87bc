pub mod enums;
pub mod error;
pub mod options;
pub mod raw;
pub mod row;

pub use enums::{MediaType, Source, Status};
pub use error::{ImportError, Result};
pub use options::MapOptions;
pub use raw::RawRow;
pub use row::TrackRow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_row_serializes_every_key() {
        let row = TrackRow {
            source: Some("hardcover".to_string()),
            media_id: Some("42".to_string()),
            media_type: Some("book".to_string()),
            status: Some("Completed".to_string()),
            ..TrackRow::default()
        };
        let json = serde_json::to_string(&row).expect("serialize row");
        let round: TrackRow = serde_json::from_str(&json).expect("deserialize row");
        assert_eq!(round, row);
        // Optional fields must be present as nulls, never omitted.
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
        let keys = value.as_object().expect("object").len();
        assert_eq!(keys, TrackRow::FIELDS.len());
    }

    #[test]
    fn raw_row_lookup() {
        let raw = RawRow::from_pairs([("Rating", "4"), ("Pages", "  ")]);
        assert_eq!(raw.get("Rating"), Some("4"));
        assert_eq!(raw.non_empty("Pages"), None);
        assert_eq!(raw.non_empty("Missing"), None);
    }
}
