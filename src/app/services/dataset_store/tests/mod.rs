//! Test utilities for the dataset store

use crate::app::services::country_resolver::CountryResolver;
use crate::app::services::dataset_store::TradeDataset;
use crate::app::services::trade_csv_parser::TradeCsvParser;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

mod store_tests;

pub const TEST_CSV: &str = "\u{feff}Period,CmdCode,ReporterDesc,PartnerDesc,PrimaryValue
2010-01,283691,Japan,Chile,\"1,000\"
2010-01,283691,Japan,Argentina,500
2010-02,283691,Japan,Chile,250
2010-02,282520,Japan,Chile,40
2011-01,283691,Rep. of Korea,\"Korea, Rep.\",10
2011-01,283691,Rep. of Korea,Atlantis,99
2011-02,283691,Rep. of Korea,China,
";

pub fn create_test_csv_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TEST_CSV.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn create_test_dataset() -> TradeDataset {
    let parser = TradeCsvParser::new(Arc::new(CountryResolver::default()));
    let result = parser.parse_reader(TEST_CSV.as_bytes(), "test").unwrap();
    TradeDataset::from_parse_result(result, "test")
}
