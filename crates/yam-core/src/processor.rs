//! Single-pass batch processor.

use tracing::{debug, error};
use yam_adapters::SourceAdapter;
use yam_model::{MapOptions, RawRow, TrackRow};

/// Maps a batch of raw rows through one adapter under one strategy.
///
/// Rows are processed in input order and numbered 1..N for diagnostics.
/// Rows the adapter resolves to nothing (unknown strategy, skip-invalid
/// drops) disappear from the output; the relative order of survivors is
/// preserved. Any adapter fault abandons the whole batch: the result is an
/// empty sequence, never a partial one.
pub fn process_rows(
    adapter: &dyn SourceAdapter,
    rows: &[RawRow],
    strategy: &str,
    options: &MapOptions,
) -> Vec<TrackRow> {
    if rows.is_empty() {
        return Vec::new();
    }
    let total = rows.len();
    debug!(total, source = %adapter.source(), strategy, "processing batch");

    let mut mapped = Vec::with_capacity(total);
    for (offset, raw) in rows.iter().enumerate() {
        let index = offset + 1;
        match adapter.map_row(raw, strategy, index, total, options) {
            Ok(Some(row)) => mapped.push(row),
            Ok(None) => {}
            Err(fault) => {
                error!(index, total, %fault, "batch abandoned on adapter fault");
                return Vec::new();
            }
        }
    }
    debug!(mapped = mapped.len(), dropped = total - mapped.len(), "batch complete");
    mapped
}
