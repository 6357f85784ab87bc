//! OpenLibrary reading-log adapter.
//!
//! Maps rows from the reading-log export downloaded at
//! `https://openlibrary.org/account/import`. Everything is a book; the
//! export carries no dates, notes, or progress.
//!
//! | Canonical field | Source column | Notes                              |
//! |-----------------|---------------|------------------------------------|
//! | source          | —             | hardcoded `openlibrary`            |
//! | media_id        | `Edition ID`  | required                           |
//! | media_type      | —             | hardcoded `book`                   |
//! | score           | `My Ratings`  | base-5 stars × 2, digits only      |
//! | status          | `Bookshelf`   | shelf-name translation, see below  |
//!
//! The default shelves translate directly; custom shelf names are matched
//! against a few conventional "dropped"/"paused" spellings, and anything
//! left falls back to "In progress" (this adapter's documented default —
//! the hardcover adapter deliberately differs and passes raw values
//! through).

use anyhow::Result;
use tracing::{debug, error, trace, warn};
use yam_model::{MapOptions, RawRow, Source, Status, TrackRow};

use crate::adapter::{SourceAdapter, finalize};
use crate::normalize::format_score;

/// Strategy identifier for the reading-log export.
pub const STRATEGY_READING_LOG: &str = "openlibrary-reading-log";

/// Mapping variants for OpenLibrary exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenLibraryStrategy {
    ReadingLog,
    Unknown,
}

impl OpenLibraryStrategy {
    fn from_id(id: &str) -> Self {
        match id {
            STRATEGY_READING_LOG => OpenLibraryStrategy::ReadingLog,
            _ => OpenLibraryStrategy::Unknown,
        }
    }
}

#[derive(Debug)]
pub struct OpenLibraryAdapter;

impl OpenLibraryAdapter {
    /// Translates a `Bookshelf` value (lowercased) to a canonical status.
    fn map_bookshelf(shelf: &str) -> Status {
        let shelf = shelf.to_lowercase();
        match shelf.as_str() {
            "already read" => Status::Completed,
            "currently reading" => Status::InProgress,
            "want to read" => Status::Planning,
            other => {
                warn!(shelf = other, "bookshelf is not a default shelf name");
                match other {
                    "dropped" | "did not finish" | "abandoned" => Status::Dropped,
                    "paused" | "on hold" => Status::Paused,
                    _ => Status::InProgress,
                }
            }
        }
    }

    /// `My Ratings` is a base-5 star count; only all-digit values count.
    fn map_score(raw: &RawRow) -> Option<String> {
        let rating = raw.non_empty("My Ratings")?;
        if rating.chars().all(|ch| ch.is_ascii_digit()) {
            trace!(%rating, "mapping score from My Ratings");
            // Widen before doubling; star counts are never trusted to be small.
            rating
                .parse::<u32>()
                .ok()
                .map(|stars| format_score(f64::from(stars) * 2.0))
        } else {
            trace!(%rating, "no usable My Ratings value, score stays empty");
            None
        }
    }
}

impl SourceAdapter for OpenLibraryAdapter {
    fn source(&self) -> Source {
        Source::OpenLibrary
    }

    fn description(&self) -> &'static str {
        "OpenLibrary reading-log export"
    }

    fn default_strategy(&self) -> &'static str {
        STRATEGY_READING_LOG
    }

    fn strategies(&self) -> &'static [&'static str] {
        &[STRATEGY_READING_LOG]
    }

    fn map_row(
        &self,
        raw: &RawRow,
        strategy: &str,
        index: usize,
        total: usize,
        options: &MapOptions,
    ) -> Result<Option<TrackRow>> {
        debug!(index, total, "mapping openlibrary row");
        match OpenLibraryStrategy::from_id(strategy) {
            OpenLibraryStrategy::ReadingLog => {}
            OpenLibraryStrategy::Unknown => {
                error!(strategy, index, "unknown openlibrary strategy");
                return Ok(None);
            }
        }

        let status = raw
            .non_empty("Bookshelf")
            .map_or(Status::Planning, Self::map_bookshelf);
        let row = TrackRow {
            source: Some(Source::OpenLibrary.as_str().to_string()),
            media_id: raw.non_empty("Edition ID").map(str::to_string),
            media_type: Some("book".to_string()),
            score: Self::map_score(raw),
            status: Some(status.as_str().to_string()),
            ..TrackRow::default()
        };
        trace!(?row, "mapped openlibrary row");
        Ok(finalize(row, index, options))
    }
}
