//! CSV reading and writing.

use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use tracing::{debug, info, trace, warn};
use yam_model::{RawRow, TrackRow};

use crate::IngestError;

/// Strips a UTF-8 BOM and squeezes internal whitespace out of a header.
/// Some services export headers with a BOM on the first column or padded
/// spacing around names.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Reads a source export into raw rows keyed by normalized header name.
///
/// Short records read as missing cells; extra cells beyond the header are
/// dropped (the core ignores columns it does not recognize anyway).
pub fn read_csv(path: &Path) -> Result<Vec<RawRow>, IngestError> {
    info!(path = %path.display(), "importing csv file");
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();
    debug!(columns = headers.len(), "csv headers read");

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut raw = RawRow::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            raw.insert(header.clone(), cell.trim_matches('\u{feff}'));
        }
        trace!(row = index + 1, ?raw, "csv row read");
        rows.push(raw);
    }
    info!(rows = rows.len(), "csv import complete");
    Ok(rows)
}

/// Writes canonical rows as the YamTrack output CSV.
///
/// Every cell is quoted so null-valued optional fields come out as explicit
/// empty cells and every row carries the identical 13-column set. An empty
/// batch writes nothing, matching the "did I get any valid rows" contract.
pub fn write_csv(rows: &[TrackRow], path: &Path) -> Result<(), IngestError> {
    if rows.is_empty() {
        warn!("no rows to export");
        return Ok(());
    }
    info!(rows = rows.len(), path = %path.display(), "exporting csv file");
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    for row in rows {
        writer.serialize(row).map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush()?;
    info!("export complete");
    Ok(())
}
