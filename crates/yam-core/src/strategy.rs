//! Strategy selection for a batch.
//!
//! The dispatch shell picks a strategy once per batch: an explicit
//! `--strategy` override wins, otherwise the input file stem is matched
//! against the well-known export filenames each service produces, and
//! finally the adapter's default applies. Adapters themselves only consume
//! the chosen identifier.

use std::path::Path;

use tracing::debug;
use yam_adapters::{SourceAdapter, igdb};
use yam_adapters::openlibrary::STRATEGY_READING_LOG;

/// Picks the strategy for a batch.
pub fn select_strategy(
    adapter: &dyn SourceAdapter,
    input: &Path,
    explicit: Option<&str>,
) -> String {
    if let Some(strategy) = explicit {
        debug!(strategy, "using explicit strategy override");
        return strategy.to_string();
    }
    let inferred = infer_from_filename(input).unwrap_or_else(|| adapter.default_strategy());
    debug!(strategy = inferred, input = %input.display(), "strategy selected");
    inferred.to_string()
}

/// Matches the file stem against service-specific export filenames.
fn infer_from_filename(input: &Path) -> Option<&'static str> {
    let stem = input.file_stem()?.to_str()?.to_lowercase();
    match stem.as_str() {
        "openlibrary_readinglog" => Some(STRATEGY_READING_LOG),
        "played" => Some(igdb::STRATEGY_LIST_PLAYED),
        "playing" => Some(igdb::STRATEGY_LIST_PLAYING),
        "want-to-play" => Some(igdb::STRATEGY_LIST_WANT),
        "steam-export" | "steamigdblookup" => Some(igdb::STRATEGY_STEAM_API),
        _ => None,
    }
}
