//! CSV ingest/output round-trip tests.

use std::fs;

use yam_ingest::{read_csv, read_xml, write_csv};
use yam_model::TrackRow;

#[test]
fn reads_raw_rows_with_bom_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hardcover.csv");
    fs::write(
        &path,
        "\u{feff}Hardcover Book ID,Status,Rating\n42,Read,4\n7,Want to Read,\n",
    )
    .expect("write fixture");

    let rows = read_csv(&path).expect("read csv");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].non_empty("Hardcover Book ID"), Some("42"));
    assert_eq!(rows[0].non_empty("Status"), Some("Read"));
    assert_eq!(rows[1].non_empty("Rating"), None);
}

#[test]
fn short_records_read_as_missing_cells() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("short.csv");
    fs::write(&path, "id,game,url\n1942,Half-Life 2\n").expect("write fixture");

    let rows = read_csv(&path).expect("read csv");
    assert_eq!(rows[0].non_empty("game"), Some("Half-Life 2"));
    assert_eq!(rows[0].get("url"), None);
}

#[test]
fn writes_quoted_csv_with_all_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.csv");
    let rows = vec![TrackRow {
        source: Some("hardcover".to_string()),
        media_id: Some("42".to_string()),
        media_type: Some("book".to_string()),
        status: Some("Completed".to_string()),
        score: Some("8.0".to_string()),
        ..TrackRow::default()
    }];
    write_csv(&rows, &path).expect("write csv");

    let written = fs::read_to_string(&path).expect("read back");
    let mut lines = written.lines();
    let header = lines.next().expect("header line");
    assert_eq!(
        header,
        "\"source\",\"media_id\",\"media_type\",\"title\",\"image\",\"season_number\",\
         \"episode_number\",\"score\",\"status\",\"notes\",\"start_date\",\"end_date\",\"progress\""
    );
    let data = lines.next().expect("data line");
    // Null optional fields come out as explicit empty cells.
    assert_eq!(
        data,
        "\"hardcover\",\"42\",\"book\",\"\",\"\",\"\",\"\",\"8.0\",\"Completed\",\"\",\"\",\"\",\"\""
    );
}

#[test]
fn empty_batch_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.csv");
    write_csv(&[], &path).expect("write csv");
    assert!(!path.exists());
}

#[test]
fn round_trip_preserves_canonical_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("round.csv");
    let rows = vec![TrackRow {
        source: Some("igdb".to_string()),
        media_id: Some("1942".to_string()),
        media_type: Some("game".to_string()),
        title: Some("Half-Life 2".to_string()),
        status: Some("Completed".to_string()),
        ..TrackRow::default()
    }];
    write_csv(&rows, &path).expect("write csv");

    let raw = read_csv(&path).expect("read back");
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].non_empty("media_id"), Some("1942"));
    assert_eq!(raw[0].non_empty("title"), Some("Half-Life 2"));
    assert_eq!(raw[0].non_empty("notes"), None);
}

#[test]
fn xml_elements_are_listed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("library.xml");
    fs::write(
        &path,
        "<library><item id=\"1\">A</item><item id=\"2\">B</item></library>",
    )
    .expect("write fixture");

    let elements = read_xml(&path).expect("read xml");
    assert_eq!(elements, ["library", "item", "item"]);
}
