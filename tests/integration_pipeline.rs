//! Integration tests for the load, filter and export pipeline
//!
//! These tests write a small COMTRADE-shaped extract to a temporary directory
//! and drive it through the public API end to end.

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use trade_atlas::app::services::country_resolver::CountryResolver;
use trade_atlas::app::services::dataset_store::{DatasetStore, load_dataset};
use trade_atlas::app::services::record_source::RecordSource;
use trade_atlas::app::services::table_export::{build_series, export_view};
use trade_atlas::config::{DisplayConfig, ValueTransform};
use trade_atlas::{Error, Selection};

/// Header with a byte-order mark and messy casing, as spreadsheet exports leave it
const EXTRACT: &str = "\u{feff} Period ,CmdCode, ReporterDesc ,PartnerDesc,PrimaryValue
2010-01,283691,Japan,Chile,\"1,234,567\"
2010-01,283691,Japan,\"Korea, Rep.\",500
2010-01,283691,Japan,\"China, Hong Kong SAR\",0
2010-02,283691,Japan,Chile,\"2,000\"
2010-02,283691,Japan,Atlantis,700
2010-03,283691,Japan,China,
2010-03,810520,Japan,Chile,12.5
2011-01,283691,Japan,Chile,42
";

fn write_extract(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("dataset_filtered_80.csv");
    std::fs::write(&path, EXTRACT).unwrap();
    path
}

#[test]
fn test_end_to_end_monthly_view() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_extract(&temp_dir);

    let dataset = load_dataset(&path, Arc::new(CountryResolver::default())).unwrap();
    let summary = dataset.summary();

    assert_eq!(summary.parse.total_rows, 8);
    assert_eq!(summary.exclusion.retained, 6);
    assert!(summary.parse.unresolved_names.contains("Atlantis"));

    let view = dataset.view(&Selection::monthly("Japan", "283691", "201001"));
    assert_eq!(view.len(), 3);

    let codes: Vec<&str> = view.rows.iter().map(|r| r.partner_iso3.as_str()).collect();
    assert!(codes.contains(&"CHL"));
    assert!(codes.contains(&"KOR"));
    assert!(codes.contains(&"HKG"));

    let chile = view.rows.iter().find(|r| r.partner_iso3 == "CHL").unwrap();
    assert_eq!(chile.value, 1_234_567.0);
}

#[test]
fn test_end_to_end_annual_view() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_extract(&temp_dir);
    let dataset = load_dataset(&path, Arc::new(CountryResolver::default())).unwrap();

    let view = dataset.view(&Selection::annual("Japan", "283691", "2010"));

    // Chile, Korea and Hong Kong; Atlantis and the blank China row are gone
    assert_eq!(view.len(), 3);
    let chile = view.rows.iter().find(|r| r.partner_iso3 == "CHL").unwrap();
    assert_eq!(chile.value, 1_236_567.0);
    assert!(view.rows.iter().all(|r| r.period.is_none()));

    let empty = dataset.view(&Selection::annual("Japan", "283691", "1999"));
    assert!(empty.is_empty());
}

#[test]
fn test_store_with_local_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_extract(&temp_dir);

    let store = DatasetStore::new(
        RecordSource::local(&path),
        Arc::new(CountryResolver::default()),
    )
    .with_progress(false);

    let first = store.get_or_load().unwrap();
    let second = store.get_or_load().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.options().years, vec!["2010", "2011"]);
}

#[test]
fn test_export_and_choropleth() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_extract(&temp_dir);
    let dataset = load_dataset(&path, Arc::new(CountryResolver::default())).unwrap();
    let view = dataset.view(&Selection::monthly("Japan", "283691", "201001"));

    let csv_path = temp_dir.path().join("out").join("view.csv");
    let summary = export_view(&view, ValueTransform::Log10, &csv_path).unwrap();
    assert_eq!(summary.rows, 3);
    assert!(csv_path.exists());

    let parquet_path = temp_dir.path().join("view.parquet");
    export_view(&view, ValueTransform::Log10, &parquet_path).unwrap();
    assert!(parquet_path.metadata().unwrap().len() > 0);

    let display = DisplayConfig {
        value_transform: ValueTransform::Log10,
        ..DisplayConfig::default()
    };
    let series = build_series(&view, &display);
    let hkg = series.locations.iter().position(|code| code == "HKG").unwrap();

    // Zero trade value has no log color
    assert_eq!(series.color_values[hkg], None);
    assert_eq!(series.colorbar_title, "log10(primaryvalue)");
}

#[test]
fn test_malformed_value_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.csv");
    std::fs::write(
        &path,
        "period,cmdcode,reporterdesc,partnerdesc,primaryvalue\n201001,283691,Japan,Chile,n/a\n",
    )
    .unwrap();

    let error = load_dataset(&path, Arc::new(CountryResolver::default())).unwrap_err();
    match error {
        Error::ValueParse { row, value, .. } => {
            assert_eq!(row, 1);
            assert_eq!(value, "n/a");
        }
        other => panic!("expected value parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_load_failure() {
    let error = load_dataset(
        &PathBuf::from("/nonexistent/extract.csv"),
        Arc::new(CountryResolver::default()),
    )
    .unwrap_err();
    assert!(error.is_load_failure());
}
