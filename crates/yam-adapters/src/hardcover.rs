//! Hardcover book-catalog adapter.
//!
//! Maps rows from a Hardcover account export (`Export your library data` CSV)
//! to the canonical schema:
//!
//! | Canonical field | Source column       | Notes                                   |
//! |-----------------|---------------------|-----------------------------------------|
//! | source          | —                   | hardcoded `hardcover`                   |
//! | media_id        | `Hardcover Book ID` | required                                |
//! | media_type      | `Media`             | book/audio/ebook → book, comic → comic  |
//! | score           | `Rating`            | base-5 stars × 2                        |
//! | status          | `Status`            | Read/Want to Read/Currently Reading     |
//! | notes           | `Private Notes`     | as is                                   |
//! | start_date      | `Date Started`      | date extended to full timestamp         |
//! | end_date        | `Date Finished`     | date extended to full timestamp         |
//! | progress        | `Pages`             | as is                                   |
//!
//! Title and image stay empty; the tracker auto-populates them from the
//! source id on import.

use anyhow::Result;
use tracing::{debug, error, trace, warn};
use yam_model::{MapOptions, RawRow, Source, TrackRow};

use crate::adapter::{SourceAdapter, finalize};
use crate::normalize::{extend_date, format_score};

/// Strategy identifier for the standard library export.
pub const STRATEGY_EXPORT: &str = "hardcover";

/// Mapping variants for Hardcover exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HardcoverStrategy {
    /// The single library-export shape Hardcover currently offers.
    Export,
    /// Anything else: logged and mapped to an empty result.
    Unknown,
}

impl HardcoverStrategy {
    fn from_id(id: &str) -> Self {
        match id {
            STRATEGY_EXPORT => HardcoverStrategy::Export,
            _ => HardcoverStrategy::Unknown,
        }
    }
}

#[derive(Debug)]
pub struct HardcoverAdapter;

impl HardcoverAdapter {
    /// Translates the `Media` column. Unrecognized labels pass through
    /// unmapped with a warning and are left for the validator.
    fn map_media_type(raw: &RawRow) -> Option<String> {
        let media = raw.non_empty("Media")?.to_lowercase();
        trace!(%media, "mapping media_type from Media");
        match media.as_str() {
            "book" | "audio" | "ebook" => Some("book".to_string()),
            "comic" => Some("comic".to_string()),
            other => {
                warn!(media = other, "unrecognized Media label, passing through unmapped");
                Some(other.to_string())
            }
        }
    }

    /// Translates the `Status` vocabulary. Unrecognized statuses pass
    /// through unmapped with a warning (this adapter's documented policy;
    /// openlibrary instead falls back to "In progress").
    fn map_status(raw: &RawRow) -> Option<String> {
        let status = raw.non_empty("Status")?;
        trace!(%status, "mapping status from Status");
        let mapped = match status {
            "Read" => "Completed",
            "Want to Read" => "Planning",
            "Currently Reading" => "In progress",
            other => {
                warn!(status = other, "unrecognized Status value, passing through unmapped");
                other
            }
        };
        Some(mapped.to_string())
    }

    /// Star rating × 2. Absent or non-numeric ratings normalize to `None`,
    /// never to zero.
    fn map_score(raw: &RawRow) -> Option<String> {
        let rating = raw.non_empty("Rating")?;
        trace!(%rating, "mapping score from Rating");
        match rating.parse::<f64>() {
            Ok(stars) => Some(format_score(stars * 2.0)),
            Err(_) => {
                warn!(%rating, "non-numeric Rating, score degrades to empty");
                None
            }
        }
    }
}

impl SourceAdapter for HardcoverAdapter {
    fn source(&self) -> Source {
        Source::Hardcover
    }

    fn description(&self) -> &'static str {
        "Hardcover library export (book catalog)"
    }

    fn default_strategy(&self) -> &'static str {
        STRATEGY_EXPORT
    }

    fn strategies(&self) -> &'static [&'static str] {
        &[STRATEGY_EXPORT]
    }

    fn map_row(
        &self,
        raw: &RawRow,
        strategy: &str,
        index: usize,
        total: usize,
        options: &MapOptions,
    ) -> Result<Option<TrackRow>> {
        debug!(index, total, "mapping hardcover row");
        match HardcoverStrategy::from_id(strategy) {
            HardcoverStrategy::Export => {}
            HardcoverStrategy::Unknown => {
                error!(strategy, index, "unknown hardcover strategy");
                return Ok(None);
            }
        }

        let row = TrackRow {
            source: Some(Source::Hardcover.as_str().to_string()),
            media_id: raw.non_empty("Hardcover Book ID").map(str::to_string),
            media_type: Self::map_media_type(raw),
            title: None,
            image: None,
            season_number: None,
            episode_number: None,
            score: Self::map_score(raw),
            status: Self::map_status(raw),
            notes: raw.non_empty("Private Notes").map(str::to_string),
            start_date: raw.non_empty("Date Started").map(extend_date),
            end_date: raw.non_empty("Date Finished").map(extend_date),
            progress: raw.non_empty("Pages").map(str::to_string),
        };
        trace!(?row, "mapped hardcover row");
        Ok(finalize(row, index, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_and_ebook_map_to_book() {
        for media in ["Book", "Audio", "eBook"] {
            let raw = RawRow::from_pairs([("Media", media)]);
            assert_eq!(HardcoverAdapter::map_media_type(&raw), Some("book".to_string()));
        }
        let raw = RawRow::from_pairs([("Media", "Comic")]);
        assert_eq!(HardcoverAdapter::map_media_type(&raw), Some("comic".to_string()));
    }

    #[test]
    fn unknown_media_passes_through() {
        let raw = RawRow::from_pairs([("Media", "Zine")]);
        assert_eq!(HardcoverAdapter::map_media_type(&raw), Some("zine".to_string()));
        assert_eq!(HardcoverAdapter::map_media_type(&RawRow::new()), None);
    }

    #[test]
    fn rating_doubles_or_degrades() {
        let raw = RawRow::from_pairs([("Rating", "4")]);
        assert_eq!(HardcoverAdapter::map_score(&raw), Some("8.0".to_string()));
        let raw = RawRow::from_pairs([("Rating", "4.5")]);
        assert_eq!(HardcoverAdapter::map_score(&raw), Some("9.0".to_string()));
        let raw = RawRow::from_pairs([("Rating", "five")]);
        assert_eq!(HardcoverAdapter::map_score(&raw), None);
        assert_eq!(HardcoverAdapter::map_score(&RawRow::new()), None);
    }
}
