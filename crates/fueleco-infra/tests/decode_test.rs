//! Integration tests for decoding vehicle datasets from disk

use std::path::PathBuf;

use fueleco_domain::repository::VehicleSource;
use fueleco_infra::{encode, JsonFileSource};
use fueleco_types::DecodeError;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_fixture_decodes_every_record() {
    let source = JsonFileSource::new(fixture("vehicles.json"));
    let vehicles = source.load_vehicles().expect("fixture should decode");

    assert_eq!(vehicles.len(), 3);
    assert_eq!(vehicles[0].trim, "");
    assert_eq!(vehicles[0].notes, None);
    assert_eq!(vehicles[1].notes.as_deref(), Some("Hybrid"));
    assert_eq!(vehicles[2].annual_fuel_cost, "$4,250");
}

#[test]
fn test_one_bad_record_fails_the_whole_file() {
    let source = JsonFileSource::new(fixture("missing_field.json"));
    match source.load_vehicles() {
        Err(DecodeError::MissingField { field, index }) => {
            assert_eq!(field, "Highway MPG");
            assert_eq!(index, 1);
        }
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_unreadable_path_is_source_unavailable() {
    let source = JsonFileSource::new(fixture("does_not_exist.json"));
    assert!(matches!(
        source.load_vehicles(),
        Err(DecodeError::SourceUnavailable(_))
    ));
}

#[test]
fn test_reencoded_fixture_drops_null_notes_only() {
    let source = JsonFileSource::new(fixture("vehicles.json"));
    let vehicles = source.load_vehicles().unwrap();
    let encoded = encode(&vehicles).unwrap();

    let records = encoded.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[0].get("Notes").is_none());
    assert_eq!(records[0]["Trim"], "");
    assert_eq!(records[2]["Notes"], "FCV");
}
