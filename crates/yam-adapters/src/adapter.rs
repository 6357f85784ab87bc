//! Adapter trait and registry.
//!
//! The [`SourceAdapter`] trait defines the common mapping contract; the
//! [`AdapterRegistry`] provides lookup by [`Source`] so the dispatch shell
//! never hard-codes adapter types.

use std::collections::HashMap;
use std::sync::OnceLock;

use anyhow::Result;
use tracing::warn;
use yam_model::{MapOptions, RawRow, Source, TrackRow};
use yam_validate::{RowValidity, validate_row};

/// Mapping contract implemented once per originating service.
///
/// `map_row` returns:
/// - `Ok(Some(row))` — a mapped row (possibly schema-invalid when the
///   skip-invalid policy is off);
/// - `Ok(None)` — the row contributes nothing to the batch (unknown
///   strategy, or an invalid row dropped by policy);
/// - `Err(_)` — an irrecoverable fault; the batch processor treats this as
///   a batch-level error and abandons the whole batch.
pub trait SourceAdapter: Send + Sync + std::fmt::Debug {
    /// The service this adapter maps from.
    fn source(&self) -> Source;

    /// Human-readable description for the `sources` listing.
    fn description(&self) -> &'static str {
        "Source adapter"
    }

    /// Strategy applied when neither a CLI override nor a filename
    /// heuristic selects one.
    fn default_strategy(&self) -> &'static str;

    /// All strategy identifiers this adapter understands.
    fn strategies(&self) -> &'static [&'static str];

    /// Maps one raw row to the canonical schema under the given strategy.
    ///
    /// `index` is 1-based and `total` is the batch size; both exist only
    /// for diagnostics.
    fn map_row(
        &self,
        raw: &RawRow,
        strategy: &str,
        index: usize,
        total: usize,
        options: &MapOptions,
    ) -> Result<Option<TrackRow>>;
}

/// Validates a candidate row and applies the skip-invalid policy.
///
/// Shared tail of every adapter's `map_row`: invalid rows are logged with
/// their full content; the policy decides between dropping them and writing
/// them through for downstream triage.
pub(crate) fn finalize(row: TrackRow, index: usize, options: &MapOptions) -> Option<TrackRow> {
    match validate_row(&row) {
        RowValidity::Valid => Some(row),
        RowValidity::Invalid { field, reason } => {
            warn!(index, field, %reason, ?row, "row failed schema validation");
            if options.skip_invalid { None } else { Some(row) }
        }
    }
}

/// Registry of adapters indexed by source.
pub struct AdapterRegistry {
    adapters: HashMap<Source, Box<dyn SourceAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Registers an adapter under its source; replaces any existing one.
    pub fn register(&mut self, adapter: Box<dyn SourceAdapter>) {
        self.adapters.insert(adapter.source(), adapter);
    }

    /// Looks an adapter up by source. Sources without an adapter (tmdb, mal,
    /// ...) are enrichment-only and return `None`.
    pub fn get(&self, source: Source) -> Option<&dyn SourceAdapter> {
        self.adapters.get(&source).map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Iterates over registered adapters in an unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SourceAdapter> {
        self.adapters.values().map(Box::as_ref)
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::hardcover::HardcoverAdapter));
        registry.register(Box::new(crate::openlibrary::OpenLibraryAdapter));
        registry.register(Box::new(crate::igdb::IgdbAdapter));
        registry
    }
}

/// Cached registry with all shipped adapters.
static DEFAULT_REGISTRY: OnceLock<AdapterRegistry> = OnceLock::new();

/// Returns the shared registry with the hardcover, openlibrary, and igdb
/// adapters registered.
pub fn default_registry() -> &'static AdapterRegistry {
    DEFAULT_REGISTRY.get_or_init(AdapterRegistry::default)
}
