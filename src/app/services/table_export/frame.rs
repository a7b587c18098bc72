//! View to DataFrame conversion
//!
//! Column names follow the normalized source columns so an exported table
//! reads like a slice of the original extract.

use crate::Result;
use crate::app::models::{Granularity, TradeView};
use crate::config::ValueTransform;
use crate::constants::columns;
use polars::prelude::*;

/// ISO3 column appended after the display columns
pub const ISO3_COLUMN: &str = "partner_iso3";

/// Color value column appended last
pub const COLOR_COLUMN: &str = "color_value";

const MONTHLY_COLUMNS: &[&str] = &[
    columns::COMMODITY_CODE,
    columns::PERIOD,
    columns::REPORTER,
    columns::PARTNER,
    columns::PRIMARY_VALUE,
];

const ANNUAL_COLUMNS: &[&str] = &[
    columns::COMMODITY_CODE,
    columns::REPORTER,
    columns::PARTNER,
    columns::PRIMARY_VALUE,
];

/// Table columns shown for a granularity; annual rows have no period
pub fn display_columns(granularity: &Granularity) -> &'static [&'static str] {
    match granularity {
        Granularity::Monthly { .. } => MONTHLY_COLUMNS,
        Granularity::Annual { .. } => ANNUAL_COLUMNS,
    }
}

/// Per-row color values under a transform
pub fn color_values(view: &TradeView, transform: ValueTransform) -> Vec<Option<f64>> {
    view.rows.iter().map(|row| transform.apply(row.value)).collect()
}

/// Build a DataFrame with the display columns, the ISO3 code and the color value
pub fn view_to_dataframe(view: &TradeView, transform: ValueTransform) -> Result<DataFrame> {
    let mut frame_columns = Vec::new();

    for &name in display_columns(&view.selection.granularity) {
        let column = match name {
            columns::COMMODITY_CODE => text_column(name, view, |row| row.commodity_code.clone()),
            columns::PERIOD => text_column(name, view, |row| {
                row.period.clone().unwrap_or_default()
            }),
            columns::REPORTER => text_column(name, view, |row| row.reporter_name.clone()),
            columns::PARTNER => text_column(name, view, |row| row.partner_name.clone()),
            _ => Column::new(
                name.into(),
                view.rows.iter().map(|row| row.value).collect::<Vec<f64>>(),
            ),
        };
        frame_columns.push(column);
    }

    frame_columns.push(text_column(ISO3_COLUMN, view, |row| {
        row.partner_iso3.clone()
    }));
    frame_columns.push(Column::new(
        COLOR_COLUMN.into(),
        color_values(view, transform),
    ));

    Ok(DataFrame::new(frame_columns)?)
}

fn text_column<F>(name: &str, view: &TradeView, field: F) -> Column
where
    F: Fn(&crate::app::models::ViewRow) -> String,
{
    Column::new(
        name.into(),
        view.rows.iter().map(field).collect::<Vec<String>>(),
    )
}
