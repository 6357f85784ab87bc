//! Type-safe enumerations for the YamTrack schema vocabularies.
//!
//! The YamTrack CSV format represents these as plain strings; the enums give
//! the validator and adapters a single place that owns the allowed value sets.
//!
//! Reference: https://github.com/FuzzyGrim/Yamtrack/wiki/Yamtrack-CSV-Format

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Originating service identifier for a tracked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Tmdb,
    Mal,
    MangaUpdates,
    Igdb,
    OpenLibrary,
    Hardcover,
    ComicVine,
    Manual,
}

impl Source {
    /// All sources accepted by the schema.
    pub const ALL: [Source; 8] = [
        Source::Tmdb,
        Source::Mal,
        Source::MangaUpdates,
        Source::Igdb,
        Source::OpenLibrary,
        Source::Hardcover,
        Source::ComicVine,
        Source::Manual,
    ];

    /// Returns the identifier as it appears in the output CSV.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Tmdb => "tmdb",
            Source::Mal => "mal",
            Source::MangaUpdates => "mangaupdates",
            Source::Igdb => "igdb",
            Source::OpenLibrary => "openlibrary",
            Source::Hardcover => "hardcover",
            Source::ComicVine => "comicvine",
            Source::Manual => "manual",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tmdb" => Ok(Source::Tmdb),
            "mal" => Ok(Source::Mal),
            "mangaupdates" => Ok(Source::MangaUpdates),
            "igdb" => Ok(Source::Igdb),
            "openlibrary" => Ok(Source::OpenLibrary),
            "hardcover" => Ok(Source::Hardcover),
            "comicvine" => Ok(Source::ComicVine),
            "manual" => Ok(Source::Manual),
            _ => Err(format!("Unknown source: {s}")),
        }
    }
}

/// Kind of media a row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Tv,
    Season,
    Episode,
    Movie,
    Anime,
    Manga,
    Game,
    Book,
    Comic,
}

impl MediaType {
    /// Returns the identifier as it appears in the output CSV.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Tv => "tv",
            MediaType::Season => "season",
            MediaType::Episode => "episode",
            MediaType::Movie => "movie",
            MediaType::Anime => "anime",
            MediaType::Manga => "manga",
            MediaType::Game => "game",
            MediaType::Book => "book",
            MediaType::Comic => "comic",
        }
    }

    /// Seasons additionally require a season number.
    pub fn requires_season_number(&self) -> bool {
        matches!(self, MediaType::Season | MediaType::Episode)
    }

    /// Episodes additionally require both season and episode numbers.
    pub fn requires_episode_number(&self) -> bool {
        matches!(self, MediaType::Episode)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tv" => Ok(MediaType::Tv),
            "season" => Ok(MediaType::Season),
            "episode" => Ok(MediaType::Episode),
            "movie" => Ok(MediaType::Movie),
            "anime" => Ok(MediaType::Anime),
            "manga" => Ok(MediaType::Manga),
            "game" => Ok(MediaType::Game),
            "book" => Ok(MediaType::Book),
            "comic" => Ok(MediaType::Comic),
            _ => Err(format!("Unknown media type: {s}")),
        }
    }
}

/// Tracking status for a row.
///
/// Note the canonical spelling "In progress" (lowercase p) used by the
/// YamTrack importer; `FromStr` only accepts the exact canonical spellings
/// since status vocabulary translation happens in the adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Completed,
    InProgress,
    Planning,
    Paused,
    Dropped,
}

impl Status {
    /// Returns the identifier as it appears in the output CSV.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::InProgress => "In progress",
            Status::Planning => "Planning",
            Status::Paused => "Paused",
            Status::Dropped => "Dropped",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Completed" => Ok(Status::Completed),
            "In progress" => Ok(Status::InProgress),
            "Planning" => Ok(Status::Planning),
            "Paused" => Ok(Status::Paused),
            "Dropped" => Ok(Status::Dropped),
            _ => Err(format!("Unknown status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_from_str() {
        assert_eq!("hardcover".parse::<Source>().unwrap(), Source::Hardcover);
        assert_eq!(" IGDB ".parse::<Source>().unwrap(), Source::Igdb);
        assert!("goodreads".parse::<Source>().is_err());
    }

    #[test]
    fn media_type_conditional_requirements() {
        assert!(MediaType::Season.requires_season_number());
        assert!(MediaType::Episode.requires_season_number());
        assert!(MediaType::Episode.requires_episode_number());
        assert!(!MediaType::Book.requires_season_number());
    }

    #[test]
    fn status_round_trip() {
        for status in [
            Status::Completed,
            Status::InProgress,
            Status::Planning,
            Status::Paused,
            Status::Dropped,
        ] {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        // Translation from source vocabularies is the adapters' job.
        assert!("in progress".parse::<Status>().is_err());
    }
}
