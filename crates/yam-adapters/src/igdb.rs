//! IGDB game-catalog adapter.
//!
//! Handles two export families, selected by strategy:
//!
//! - `igdb` / `list-played` / `list-playing` / `list-want`: the
//!   `Download CSV` feature on IGDB lists. The list strategies are inferred
//!   from the list filename and fix the status for every row.
//! - `steam_api`: a Steam library export already enriched with an
//!   `igdb_id` column by the external lookup collaborator.
//!
//! The list exports carry global game ratings, not user ratings, so score
//! is always empty. The default status is Planning.

use anyhow::Result;
use tracing::{debug, error, trace};
use yam_model::{MapOptions, RawRow, Source, Status, TrackRow};

use crate::adapter::{SourceAdapter, finalize};

pub const STRATEGY_IGDB: &str = "igdb";
pub const STRATEGY_STEAM_API: &str = "steam_api";
pub const STRATEGY_LIST_PLAYED: &str = "list-played";
pub const STRATEGY_LIST_PLAYING: &str = "list-playing";
pub const STRATEGY_LIST_WANT: &str = "list-want";

/// Mapping variants for IGDB exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IgdbStrategy {
    /// Plain list export; title from the `game` column.
    Igdb,
    /// Steam library export enriched with `igdb_id`.
    SteamApi,
    /// `played.csv` list: everything Completed.
    ListPlayed,
    /// `playing.csv` list: everything In progress.
    ListPlaying,
    /// `want-to-play.csv` list: everything Planning.
    ListWant,
    Unknown,
}

impl IgdbStrategy {
    fn from_id(id: &str) -> Self {
        match id {
            STRATEGY_IGDB => IgdbStrategy::Igdb,
            STRATEGY_STEAM_API => IgdbStrategy::SteamApi,
            STRATEGY_LIST_PLAYED => IgdbStrategy::ListPlayed,
            STRATEGY_LIST_PLAYING => IgdbStrategy::ListPlaying,
            STRATEGY_LIST_WANT => IgdbStrategy::ListWant,
            _ => IgdbStrategy::Unknown,
        }
    }
}

#[derive(Debug)]
pub struct IgdbAdapter;

impl SourceAdapter for IgdbAdapter {
    fn source(&self) -> Source {
        Source::Igdb
    }

    fn description(&self) -> &'static str {
        "IGDB list exports and enriched Steam libraries"
    }

    fn default_strategy(&self) -> &'static str {
        STRATEGY_IGDB
    }

    fn strategies(&self) -> &'static [&'static str] {
        &[
            STRATEGY_IGDB,
            STRATEGY_STEAM_API,
            STRATEGY_LIST_PLAYED,
            STRATEGY_LIST_PLAYING,
            STRATEGY_LIST_WANT,
        ]
    }

    fn map_row(
        &self,
        raw: &RawRow,
        strategy: &str,
        index: usize,
        total: usize,
        options: &MapOptions,
    ) -> Result<Option<TrackRow>> {
        debug!(index, total, "mapping igdb row");

        let mut media_id = None;
        let mut title = None;
        let mut status = Status::Planning;
        match IgdbStrategy::from_id(strategy) {
            IgdbStrategy::Igdb => {
                media_id = raw.non_empty("id");
                title = raw.non_empty("game");
            }
            IgdbStrategy::SteamApi => {
                media_id = raw.non_empty("igdb_id");
                title = raw.non_empty("name");
            }
            IgdbStrategy::ListPlayed => {
                media_id = raw.non_empty("id");
                status = Status::Completed;
            }
            IgdbStrategy::ListPlaying => {
                media_id = raw.non_empty("id");
                status = Status::InProgress;
            }
            IgdbStrategy::ListWant => {
                media_id = raw.non_empty("id");
                status = Status::Planning;
            }
            IgdbStrategy::Unknown => {
                error!(strategy, index, "unknown igdb strategy");
                return Ok(None);
            }
        }

        let row = TrackRow {
            source: Some(Source::Igdb.as_str().to_string()),
            media_id: media_id.map(str::to_string),
            media_type: Some("game".to_string()),
            title: title.map(str::to_string),
            status: Some(status.as_str().to_string()),
            ..TrackRow::default()
        };
        trace!(?row, "mapped igdb row");
        Ok(finalize(row, index, options))
    }
}
