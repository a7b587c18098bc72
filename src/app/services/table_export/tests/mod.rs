//! Test utilities for table export

use crate::app::models::{Selection, TradeView, ViewRow};

mod choropleth_tests;
mod frame_tests;

fn row(period: Option<&str>, partner: &str, iso3: &str, value: f64) -> ViewRow {
    ViewRow {
        commodity_code: "283691".to_string(),
        period: period.map(str::to_string),
        year: "2010".to_string(),
        reporter_name: "Japan".to_string(),
        partner_name: partner.to_string(),
        partner_iso3: iso3.to_string(),
        value,
    }
}

pub fn create_monthly_view() -> TradeView {
    TradeView {
        selection: Selection::monthly("Japan", "283691", "201001"),
        rows: vec![
            row(Some("201001"), "Argentina", "ARG", 0.0),
            row(Some("201001"), "Chile", "CHL", 1000.0),
        ],
    }
}

pub fn create_annual_view() -> TradeView {
    TradeView {
        selection: Selection::annual("Japan", "283691", "2010"),
        rows: vec![
            row(None, "Chile", "CHL", 100.0),
            row(None, "China", "CHN", 10.0),
            row(None, "Korea, Rep.", "KOR", 1.0),
        ],
    }
}
