//! Canonical output row for the YamTrack CSV format.

use serde::{Deserialize, Serialize};

/// One row of the canonical YamTrack CSV.
///
/// Every field is optional at the type level; the schema validator in
/// `yam-validate` decides which combinations are acceptable. Values stay
/// stringly typed so a malformed mapping (say, a score of `"11"` or a date
/// that did not normalize) can still be carried to the validator and, when
/// the skip-invalid policy is off, written through for downstream triage.
///
/// Field order matters: the CSV writer serializes fields in declaration
/// order, and every emitted row must carry the identical 13-column set with
/// absent values as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRow {
    pub source: Option<String>,
    pub media_id: Option<String>,
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub season_number: Option<String>,
    pub episode_number: Option<String>,
    pub score: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub progress: Option<String>,
}

impl TrackRow {
    /// Canonical column names in serialization order.
    pub const FIELDS: [&'static str; 13] = [
        "source",
        "media_id",
        "media_type",
        "title",
        "image",
        "season_number",
        "episode_number",
        "score",
        "status",
        "notes",
        "start_date",
        "end_date",
        "progress",
    ];

    /// Looks a field up by canonical column name.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "source" => &self.source,
            "media_id" => &self.media_id,
            "media_type" => &self.media_type,
            "title" => &self.title,
            "image" => &self.image,
            "season_number" => &self.season_number,
            "episode_number" => &self.episode_number,
            "score" => &self.score,
            "status" => &self.status,
            "notes" => &self.notes,
            "start_date" => &self.start_date,
            "end_date" => &self.end_date,
            "progress" => &self.progress,
            _ => return None,
        };
        value.as_deref()
    }
}
