//! Choropleth series for an external charting layer
//!
//! The series carries everything a map needs: one location per partner, its
//! color value, a hover label, titles, the color scale and the projection.

use super::frame::color_values;
use crate::Result;
use crate::app::models::{Granularity, TradeView};
use crate::config::DisplayConfig;
use crate::constants::{DEFAULT_PROJECTION, columns};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethSeries {
    /// ISO3 codes, one per row
    pub locations: Vec<String>,
    /// Transformed values; `None` means no color (e.g. log of zero)
    pub color_values: Vec<Option<f64>>,
    /// Partner display names
    pub hover_names: Vec<String>,
    pub title: String,
    pub colorbar_title: String,
    pub color_scale: String,
    pub projection: String,
}

impl ChoroplethSeries {
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Chart title for a view, e.g. "Japan imports of 283691 (year: 2010) [log10(primaryvalue)]"
pub fn chart_title(view: &TradeView, display: &DisplayConfig) -> String {
    let selection = &view.selection;
    let scope = match &selection.granularity {
        Granularity::Monthly { period } => format!("period: {}", period),
        Granularity::Annual { year } => format!("year: {}", year),
    };
    format!(
        "{} imports of {} ({}) [{}]",
        selection.reporter_name,
        selection.commodity_code,
        scope,
        display.value_transform.colorbar_title(columns::PRIMARY_VALUE)
    )
}

/// Build the choropleth series for a view
pub fn build_series(view: &TradeView, display: &DisplayConfig) -> ChoroplethSeries {
    ChoroplethSeries {
        locations: view.rows.iter().map(|row| row.partner_iso3.clone()).collect(),
        color_values: color_values(view, display.value_transform),
        hover_names: view.rows.iter().map(|row| row.partner_name.clone()).collect(),
        title: chart_title(view, display),
        colorbar_title: display
            .value_transform
            .colorbar_title(columns::PRIMARY_VALUE),
        color_scale: display.color_scale.clone(),
        projection: DEFAULT_PROJECTION.to_string(),
    }
}
