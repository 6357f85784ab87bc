//! Model-level tests: canonical field set and enum vocabularies.

use std::str::FromStr;

use yam_model::{MediaType, Source, Status, TrackRow};

#[test]
fn canonical_field_order_is_stable() {
    let row = TrackRow::default();
    let json = serde_json::to_string(&row).expect("serialize");
    // Serialization order drives the output CSV column order.
    let positions: Vec<usize> = TrackRow::FIELDS
        .iter()
        .map(|field| json.find(&format!("\"{field}\"")).expect("field present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn every_source_round_trips() {
    for source in Source::ALL {
        assert_eq!(Source::from_str(source.as_str()).unwrap(), source);
    }
}

#[test]
fn enum_vocabularies_match_schema() {
    assert!(MediaType::from_str("episode").is_ok());
    assert!(MediaType::from_str("music").is_err());
    assert_eq!(Status::InProgress.as_str(), "In progress");
}
