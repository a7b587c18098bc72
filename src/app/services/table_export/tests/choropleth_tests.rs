use super::*;
use crate::app::services::table_export::{build_series, chart_title};
use crate::config::{DisplayConfig, ValueTransform};

#[test]
fn test_series_aligns_rows() {
    let view = create_annual_view();
    let series = build_series(&view, &DisplayConfig::default());

    assert_eq!(series.locations, vec!["CHL", "CHN", "KOR"]);
    assert_eq!(series.hover_names[2], "Korea, Rep.");
    assert_eq!(series.color_values, vec![Some(100.0), Some(10.0), Some(1.0)]);
    assert_eq!(series.colorbar_title, "primaryvalue");
    assert_eq!(series.projection, "natural earth");
    assert_eq!(series.color_scale, "Viridis_r");
}

#[test]
fn test_log_series() {
    let display = DisplayConfig {
        value_transform: ValueTransform::Log10,
        ..DisplayConfig::default()
    };
    let series = build_series(&create_monthly_view(), &display);

    assert_eq!(series.color_values[0], None);
    assert!((series.color_values[1].unwrap() - 3.0).abs() < 1e-12);
    assert_eq!(series.colorbar_title, "log10(primaryvalue)");
    assert_eq!(
        series.title,
        "Japan imports of 283691 (period: 201001) [log10(primaryvalue)]"
    );
}

#[test]
fn test_annual_title() {
    let title = chart_title(&create_annual_view(), &DisplayConfig::default());
    assert_eq!(title, "Japan imports of 283691 (year: 2010) [primaryvalue]");
}

#[test]
fn test_series_json() {
    let display = DisplayConfig {
        value_transform: ValueTransform::Log10,
        ..DisplayConfig::default()
    };
    let json = build_series(&create_monthly_view(), &display)
        .to_json_pretty()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["color_values"][0].is_null());
    assert_eq!(value["locations"][1], "CHL");
}
