//! Tests for column and text normalization

use crate::app::services::trade_csv_parser::{
    ColumnMapping, RawTable, normalize_column_name, normalize_table,
};

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

#[test]
fn test_column_names_normalized() {
    assert_eq!(normalize_column_name("\u{feff}Period"), "period");
    assert_eq!(normalize_column_name("  CmdCode "), "cmdcode");
    assert_eq!(normalize_column_name("\u{feff} ReporterDesc"), "reporterdesc");
    assert_eq!(normalize_column_name("primaryvalue"), "primaryvalue");
}

#[test]
fn test_text_columns_trimmed() {
    let mut raw = table(
        &["\u{feff}Period", "CmdCode", "ReporterDesc", "PartnerDesc", "PrimaryValue", "Flow"],
        &[&[" 2010-01", " 283691 ", "Japan ", "  Chile", " 10 ", " Import "]],
    );

    let skipped = normalize_table(&mut raw);

    assert!(skipped.is_empty());
    assert_eq!(
        raw.headers,
        vec!["period", "cmdcode", "reporterdesc", "partnerdesc", "primaryvalue", "flow"]
    );
    assert_eq!(raw.rows[0][0], "2010-01");
    assert_eq!(raw.rows[0][1], "283691");
    assert_eq!(raw.rows[0][2], "Japan");
    assert_eq!(raw.rows[0][3], "Chile");
    // Non-text columns are left for their own parsers
    assert_eq!(raw.rows[0][4], " 10 ");
    assert_eq!(raw.rows[0][5], " Import ");
}

#[test]
fn test_missing_columns_are_skipped() {
    let mut raw = table(&["Period", "PartnerDesc"], &[&["2010-01 ", " Chile"]]);

    let skipped = normalize_table(&mut raw);

    assert_eq!(skipped, vec!["cmdcode", "reporterdesc"]);
    assert_eq!(raw.rows[0], vec!["2010-01", "Chile"]);
}

#[test]
fn test_normalization_is_idempotent() {
    let mut once = table(
        &["\u{feff} Period", "CMDCODE", "reporterDesc ", "PartnerDesc", "primaryValue"],
        &[
            &[" 2010-01", "283691 ", " Japan", "Korea, Rep. ", "1,000"],
            &["2010-02", " 283691", "Japan", "  Chile ", ""],
        ],
    );
    normalize_table(&mut once);

    let mut twice = once.clone();
    normalize_table(&mut twice);

    assert_eq!(once, twice);
}

#[test]
fn test_column_mapping_reports_missing_required() {
    let headers = vec!["period".to_string(), "cmdcode".to_string(), "period".to_string()];
    let mapping = ColumnMapping::analyze(&headers);

    assert_eq!(mapping.get_index("period"), Some(0));
    assert!(mapping.has_column("cmdcode"));
    assert_eq!(
        mapping.missing_columns,
        vec!["reporterdesc", "partnerdesc", "primaryvalue"]
    );
}
