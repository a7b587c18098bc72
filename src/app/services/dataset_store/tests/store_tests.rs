use super::*;
use crate::Error;
use crate::app::services::dataset_store::{DatasetStore, load_dataset};
use crate::app::services::record_source::RecordSource;

#[test]
fn test_load_dataset_from_file() {
    let file = create_test_csv_file();
    let dataset = load_dataset(file.path(), Arc::new(CountryResolver::default())).unwrap();

    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.summary().source, file.path().display().to_string());
}

#[test]
fn test_store_memoizes_load() {
    let file = create_test_csv_file();
    let store = DatasetStore::new(
        RecordSource::local(file.path()),
        Arc::new(CountryResolver::default()),
    )
    .with_progress(false);

    assert!(!store.is_loaded());
    let first = store.get_or_load().unwrap();
    assert!(store.is_loaded());

    // Removing the file proves the second call never touches disk
    let path = file.path().to_path_buf();
    drop(file);
    assert!(!path.exists());

    let second = store.get_or_load().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_store_does_not_memoize_failure() {
    let store = DatasetStore::new(
        RecordSource::local("/nonexistent/trade.csv"),
        Arc::new(CountryResolver::default()),
    );

    assert!(matches!(store.get_or_load(), Err(Error::FileNotFound { .. })));
    assert!(!store.is_loaded());
}

#[test]
fn test_malformed_value_fails_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(
        &mut file,
        b"period,cmdcode,reporterdesc,partnerdesc,primaryvalue\n201001,283691,Japan,Chile,12abc\n",
    )
    .unwrap();

    let result = load_dataset(file.path(), Arc::new(CountryResolver::default()));
    assert!(matches!(result, Err(Error::ValueParse { .. })));
}
