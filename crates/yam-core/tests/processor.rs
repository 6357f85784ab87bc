//! Batch processor semantics: ordering, drops, and the batch fail-safe.

use anyhow::{Result, bail};
use yam_adapters::SourceAdapter;
use yam_adapters::hardcover::HardcoverAdapter;
use yam_core::process_rows;
use yam_model::{MapOptions, RawRow, Source, TrackRow};

/// Test adapter that maps every row trivially but faults on one index,
/// standing in for a programming fault inside an adapter.
#[derive(Debug)]
struct FaultingAdapter {
    fault_at: usize,
}

impl SourceAdapter for FaultingAdapter {
    fn source(&self) -> Source {
        Source::Manual
    }

    fn default_strategy(&self) -> &'static str {
        "manual"
    }

    fn strategies(&self) -> &'static [&'static str] {
        &["manual"]
    }

    fn map_row(
        &self,
        raw: &RawRow,
        _strategy: &str,
        index: usize,
        _total: usize,
        _options: &MapOptions,
    ) -> Result<Option<TrackRow>> {
        if index == self.fault_at {
            bail!("malformed row structure at index {index}");
        }
        Ok(Some(TrackRow {
            source: Some("manual".to_string()),
            media_id: raw.non_empty("id").map(str::to_string),
            media_type: Some("book".to_string()),
            status: Some("Completed".to_string()),
            ..TrackRow::default()
        }))
    }
}

fn hardcover_row(id: &str, status: &str) -> RawRow {
    RawRow::from_pairs([
        ("Hardcover Book ID", id),
        ("Status", status),
        ("Media", "Book"),
    ])
}

#[test]
fn empty_batch_is_empty_without_adapter_calls() {
    let out = process_rows(&FaultingAdapter { fault_at: 1 }, &[], "manual", &MapOptions::default());
    assert!(out.is_empty());
}

#[test]
fn adapter_fault_abandons_whole_batch() {
    let rows: Vec<RawRow> = (1..=5)
        .map(|i| RawRow::from_pairs([("id", i.to_string())]))
        .collect();
    let out = process_rows(&FaultingAdapter { fault_at: 3 }, &rows, "manual", &MapOptions::default());
    // Not N-1 survivors: one irrecoverable fault empties the batch.
    assert!(out.is_empty());
}

#[test]
fn fault_free_batch_preserves_order() {
    let rows: Vec<RawRow> = (1..=4)
        .map(|i| RawRow::from_pairs([("id", i.to_string())]))
        .collect();
    let out = process_rows(&FaultingAdapter { fault_at: 0 }, &rows, "manual", &MapOptions::default());
    let ids: Vec<_> = out.iter().map(|row| row.media_id.clone().unwrap()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[test]
fn validation_failure_with_skip_invalid_drops_exactly_that_row() {
    let rows = vec![
        hardcover_row("1", "Read"),
        // Blank media_id fails schema validation, everything else maps.
        hardcover_row("", "Read"),
        hardcover_row("3", "Want to Read"),
    ];
    let options = MapOptions::default().with_skip_invalid(true);
    let out = process_rows(&HardcoverAdapter, &rows, "hardcover", &options);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].media_id.as_deref(), Some("1"));
    assert_eq!(out[1].media_id.as_deref(), Some("3"));
}

#[test]
fn pass_through_policy_keeps_invalid_rows() {
    let rows = vec![hardcover_row("1", "Read"), hardcover_row("", "Read")];
    let out = process_rows(&HardcoverAdapter, &rows, "hardcover", &MapOptions::default());
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].media_id, None);
}

#[test]
fn unknown_strategy_drops_rows_without_aborting() {
    let rows = vec![hardcover_row("1", "Read"), hardcover_row("2", "Read")];
    let out = process_rows(&HardcoverAdapter, &rows, "no-such-strategy", &MapOptions::default());
    assert!(out.is_empty());
}
