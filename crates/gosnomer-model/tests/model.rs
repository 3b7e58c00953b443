//! Integration tests for the plate model.

use gosnomer_model::alphabet::{ALLOWED_LETTERS, is_allowed_symbol};
use gosnomer_model::{Mask, NormalizationOptions, PlateFormat};

#[test]
fn test_canonical_set_is_closed() {
    let identifiers: Vec<&str> = PlateFormat::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(
        identifiers,
        vec![
            "X999XX99",
            "X999XX999",
            "XX99999",
            "XX999999",
            "9999XX99",
            "XX99XX99"
        ]
    );
    assert!(!PlateFormat::ALL.iter().any(|f| f.as_str() == "99999999"));
}

#[test]
fn test_letters_are_cyrillic() {
    assert_eq!(ALLOWED_LETTERS.len(), 12);
    assert!(ALLOWED_LETTERS.iter().all(|ch| !ch.is_ascii()));
    assert!(!is_allowed_symbol('Ю'));
}

#[test]
fn test_format_serializes_as_identifier() {
    let json = serde_json::to_string(&PlateFormat::Tractor).expect("serialize format");
    assert_eq!(json, "\"9999XX99\"");
    let format: PlateFormat = serde_json::from_str("\"XX99XX99\"").expect("deserialize format");
    assert_eq!(format, PlateFormat::Moped);
    assert!(serde_json::from_str::<PlateFormat>("\"99999999\"").is_err());
}

#[test]
fn test_options_load_from_toml() {
    let options: NormalizationOptions =
        toml::from_str(r#"preferred_formats = ["9999XX99", "X999XX99"]"#).expect("parse options");
    assert_eq!(
        options.preferred_formats,
        vec![PlateFormat::Tractor, PlateFormat::Standard]
    );

    let empty: NormalizationOptions = toml::from_str("").expect("parse empty options");
    assert_eq!(empty, NormalizationOptions::default());

    assert!(toml::from_str::<NormalizationOptions>(r#"preferred_formats = ["X"]"#).is_err());
}

#[test]
fn test_mask_round_trips_through_text() {
    let mask: Mask = "***9XX99".parse().expect("parse mask");
    assert_eq!(mask.to_string(), "***9XX99");
    assert_eq!(mask.ambiguous_positions(), vec![0, 1, 2]);
}
