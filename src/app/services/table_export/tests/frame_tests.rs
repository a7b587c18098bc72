use super::*;
use crate::app::services::table_export::{COLOR_COLUMN, ISO3_COLUMN, display_columns, view_to_dataframe};
use crate::config::ValueTransform;

#[test]
fn test_display_columns_per_mode() {
    let monthly = create_monthly_view();
    let annual = create_annual_view();

    assert_eq!(
        display_columns(&monthly.selection.granularity),
        &["cmdcode", "period", "reporterdesc", "partnerdesc", "primaryvalue"]
    );
    assert_eq!(
        display_columns(&annual.selection.granularity),
        &["cmdcode", "reporterdesc", "partnerdesc", "primaryvalue"]
    );
}

#[test]
fn test_monthly_frame_shape() {
    let df = view_to_dataframe(&create_monthly_view(), ValueTransform::Identity).unwrap();

    assert_eq!(df.height(), 2);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "cmdcode",
            "period",
            "reporterdesc",
            "partnerdesc",
            "primaryvalue",
            ISO3_COLUMN,
            COLOR_COLUMN
        ]
    );
}

#[test]
fn test_annual_frame_has_no_period() {
    let df = view_to_dataframe(&create_annual_view(), ValueTransform::Log10).unwrap();

    assert_eq!(df.height(), 3);
    assert!(df.column("period").is_err());
    assert_eq!(df.width(), 6);
}

#[test]
fn test_log_color_of_zero_is_null() {
    let df = view_to_dataframe(&create_monthly_view(), ValueTransform::Log10).unwrap();
    let colors = df.column(COLOR_COLUMN).unwrap();

    assert_eq!(colors.null_count(), 1);
}

#[test]
fn test_empty_view_frame() {
    let mut view = create_monthly_view();
    view.rows.clear();

    let df = view_to_dataframe(&view, ValueTransform::Identity).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 7);
}
