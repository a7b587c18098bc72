//! Test utilities for trade CSV parsing
//!
//! Sample extracts shaped like the COMTRADE downloads the dashboard used,
//! including a byte-order mark and inconsistent header casing.

use crate::app::services::country_resolver::CountryResolver;
use crate::app::services::trade_csv_parser::TradeCsvParser;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

mod normalizer_tests;

/// Extract with a BOM, padded headers and a mix of partner spellings
pub fn create_test_trade_csv() -> String {
    "\u{feff} Period ,CmdCode,ReporterDesc, PartnerDesc,PrimaryValue\n\
     2010-01,283691,Japan,Chile,\"1,234,567\"\n\
     2010-01,283691,Japan,\" Korea, Rep. \",500\n\
     2010-02,283691,Japan,Chile,\"2,000\"\n\
     2010-02,283691,Japan,Atlantis,700\n\
     2010-02,283691,Japan,China,\n\
     2010-03,810520,Rep. of Korea,\"China, Hong Kong SAR\",\"12.5\"\n"
        .to_string()
}

/// Minimal extract with only the required columns
pub fn create_minimal_trade_csv() -> String {
    "period,cmdcode,reporterdesc,partnerdesc,primaryvalue\n\
     201001,283691,Japan,Chile,10\n"
        .to_string()
}

pub fn create_test_parser() -> TradeCsvParser {
    TradeCsvParser::new(Arc::new(CountryResolver::with_default_lookup()))
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
