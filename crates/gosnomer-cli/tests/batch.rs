//! Integration tests for batch normalization and option loading.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use gosnomer_cli::batch::{normalize_batch, read_inputs};
use gosnomer_cli::config::load_options;
use gosnomer_model::PlateFormat;
use gosnomer_normalize::Normalizer;

fn unique_temp_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "gosnomer-{}-{}-{}.toml",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn test_batch_keeps_failures() {
    let normalizer = Normalizer::default();
    let report = normalize_batch(&normalizer, ["YY1239O", "ГН99900", "12340078", ""]);

    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.normalized_count(), 2);
    assert_eq!(report.failed_count(), 2);
    assert!(report.has_errors());
    assert_eq!(report.outcomes[1].input, "ГН99900");
    assert!(report.outcomes[1].result.is_err());
}

#[test]
fn test_batch_without_failures() {
    let normalizer = Normalizer::from_preferred(&["9999XX99"]).unwrap();
    let report = normalize_batch(&normalizer, vec!["о001тр98".to_string()]);
    assert!(!report.has_errors());
    let normalized = report.outcomes[0].result.as_ref().unwrap();
    assert_eq!(normalized.plate, "0001ТР98");
}

#[test]
fn test_json_records() {
    let normalizer = Normalizer::default();
    let report = normalize_batch(&normalizer, ["о001тр98", "ГН99900"]);
    let lines: Vec<String> = report
        .outcomes
        .iter()
        .map(|outcome| serde_json::to_string(&outcome.record()).unwrap())
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r#"
    {"input":"о001тр98","plate":"О001ТР98","format":"X999XX99"}
    {"input":"ГН99900","error":"invalid character: \"Г\""}
    "#);
}

#[test]
fn test_read_inputs_skips_blank_lines() {
    let input = Cursor::new("  а123вс77 \n\n\t\n12340078\n");
    let inputs = read_inputs(input).unwrap();
    assert_eq!(inputs, vec!["а123вс77", "12340078"]);
}

#[test]
fn test_flags_take_precedence_over_config() {
    let path = unique_temp_file("config");
    fs::write(&path, "preferred_formats = [\"X999XX99\"]\n").unwrap();

    let options = load_options(Some(path.as_path()), &["9999XX99".to_string()]).unwrap();
    assert_eq!(
        options.preferred_formats,
        vec![PlateFormat::Tractor, PlateFormat::Standard]
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_invalid_config_is_reported() {
    let path = unique_temp_file("invalid");
    fs::write(&path, "preferred_formats = [\"99999999\"]\n").unwrap();

    let err = load_options(Some(path.as_path()), &[]).unwrap_err();
    assert!(err.to_string().starts_with("parse config"), "{err}");

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_invalid_prefer_flag_is_reported() {
    let err = load_options(None, &["XX".to_string()]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "preferred formats contain unknown entries: \"XX\""
    );
}

#[test]
fn test_missing_config_file() {
    let path = unique_temp_file("missing");
    let err = load_options(Some(path.as_path()), &[]).unwrap_err();
    assert!(err.to_string().starts_with("read config"), "{err}");
}
