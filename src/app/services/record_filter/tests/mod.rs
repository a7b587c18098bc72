//! Test utilities for record filtering

use crate::app::models::{ResolvedTrade, TradeRecord};


/// Build a complete record
pub fn trade(period: &str, reporter: &str, commodity: &str, partner: &str, iso3: &str, value: f64) -> ResolvedTrade {
    TradeRecord::new(
        period.to_string(),
        commodity.to_string(),
        reporter.to_string(),
        partner.to_string(),
        Some(iso3.to_string()),
        Some(value),
    )
    .into_resolved()
    .unwrap()
}

/// A year of Japanese lithium carbonate imports plus unrelated noise
pub fn create_test_dataset() -> Vec<ResolvedTrade> {
    vec![
        trade("201001", "X", "283691", "Chile", "CHL", 100.0),
        trade("201001", "X", "283691", "Argentina", "ARG", 50.0),
        trade("201002", "X", "283691", "Chile", "CHL", 200.0),
        trade("201002", "X", "283691", "China", "CHN", 25.0),
        trade("201012", "X", "283691", "Chile", "CHL", 300.0),
        trade("201101", "X", "283691", "Chile", "CHL", 999.0),
        trade("201001", "X", "282520", "Chile", "CHL", 7.0),
        trade("201001", "Y", "283691", "Chile", "CHL", 11.0),
    ]
}
