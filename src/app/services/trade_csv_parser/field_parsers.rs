//! Period and trade-value parsing
//!
//! Periods lose their hyphens ("2010-01" becomes "201001"); no further
//! validation is applied. Values lose their thousands separators; an empty
//! value is missing, anything else must parse as a number.

use crate::{Error, Result};

/// Normalize a raw period: remove hyphens, then trim
pub fn normalize_period(raw: &str) -> String {
    raw.replace('-', "").trim().to_string()
}

/// Parse a raw trade value
///
/// Returns `Ok(None)` for a cell that is empty once commas are removed, and
/// for a literal NaN. Returns [`Error::ValueParse`] when the text is present
/// but not numeric, whitespace-only cells included; `row` is the 1-based data
/// row used in that error.
pub fn parse_value(raw: &str, row: usize, column: &str) -> Result<Option<f64>> {
    let cleaned = raw.replace(',', "");
    if cleaned.is_empty() {
        return Ok(None);
    }

    let value = cleaned
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::value_parse(row, column, raw))?;

    if value.is_nan() { Ok(None) } else { Ok(Some(value)) }
}
