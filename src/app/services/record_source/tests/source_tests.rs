use crate::Error;
use crate::app::services::record_source::RecordSource;
use crate::config::{Config, SourceKind};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_local_source_returns_existing_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trade.csv");
    std::fs::write(&path, "period\n201001\n").unwrap();

    let source = RecordSource::local(&path);
    assert_eq!(source.materialize(false).unwrap(), path);
}

#[test]
fn test_local_source_missing_file() {
    let source = RecordSource::local("/nonexistent/trade.csv");
    let error = source.materialize(false).unwrap_err();

    assert!(matches!(error, Error::FileNotFound { .. }));
    assert!(error.is_load_failure());
}

#[test]
fn test_remote_source_reuses_cache() {
    let temp_dir = TempDir::new().unwrap();
    let cache_path = temp_dir.path().join("dataset.csv");
    std::fs::write(&cache_path, "period\n201001\n").unwrap();

    // Unroutable URL: a network attempt would fail the test
    let source = RecordSource::Remote {
        url: "http://127.0.0.1:9/dataset.csv".to_string(),
        cache_path: cache_path.clone(),
        refresh: false,
    };
    assert_eq!(source.materialize(false).unwrap(), cache_path);
}

#[test]
fn test_remote_refresh_surfaces_download_error() {
    let temp_dir = TempDir::new().unwrap();
    let cache_path = temp_dir.path().join("dataset.csv");
    std::fs::write(&cache_path, "stale").unwrap();

    let source = RecordSource::Remote {
        url: "http://127.0.0.1:9/dataset.csv".to_string(),
        cache_path,
        refresh: true,
    };
    let error = source.materialize(false).unwrap_err();
    assert!(matches!(error, Error::Download { .. }));
}

#[test]
fn test_from_config() {
    let mut config = Config::default();
    config.source.local_path = PathBuf::from("data/extract.csv");
    assert_eq!(
        RecordSource::from_config(&config).unwrap(),
        RecordSource::local("data/extract.csv")
    );

    config.source.kind = SourceKind::Remote;
    config.source.cache_dir = Some(PathBuf::from("/tmp/atlas"));
    config.source.refresh = true;
    match RecordSource::from_config(&config).unwrap() {
        RecordSource::Remote {
            cache_path, refresh, ..
        } => {
            assert_eq!(cache_path, PathBuf::from("/tmp/atlas/dataset_filtered_80.csv"));
            assert!(refresh);
        }
        other => panic!("expected remote source, got {:?}", other),
    }
}
