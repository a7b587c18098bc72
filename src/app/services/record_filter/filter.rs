//! Selection filtering and annual aggregation
//!
//! Monthly selections match `period`, annual selections match `year`; both
//! also require exact `commodity_code` and `reporter_name` equality. Annual
//! results are summed per `(partner_name, partner_iso3)`.

use crate::app::models::{Granularity, ResolvedTrade, Selection, TradeView, ViewRow};
use std::collections::BTreeMap;
use tracing::debug;

/// Compute the view for one selection
///
/// An empty view means "no data for this selection" and is not an error.
/// Rows come back ordered by partner name.
pub fn filter_view(records: &[ResolvedTrade], selection: &Selection) -> TradeView {
    let matching = records
        .iter()
        .filter(|record| matches_selection(record, selection));

    let rows = match &selection.granularity {
        Granularity::Monthly { .. } => {
            let mut rows: Vec<ViewRow> = matching.map(monthly_row).collect();
            rows.sort_by(|a, b| a.partner_name.cmp(&b.partner_name));
            rows
        }
        Granularity::Annual { year } => aggregate_by_partner(matching, selection, year),
    };

    debug!("Selection [{}] matched {} rows", selection, rows.len());

    TradeView {
        selection: selection.clone(),
        rows,
    }
}

/// Check whether a record falls inside a selection
pub fn matches_selection(record: &ResolvedTrade, selection: &Selection) -> bool {
    let in_scope = match &selection.granularity {
        Granularity::Monthly { period } => record.period == *period,
        Granularity::Annual { year } => record.year == *year,
    };
    in_scope
        && record.commodity_code == selection.commodity_code
        && record.reporter_name == selection.reporter_name
}

fn monthly_row(record: &ResolvedTrade) -> ViewRow {
    ViewRow {
        commodity_code: record.commodity_code.clone(),
        period: Some(record.period.clone()),
        year: record.year.clone(),
        reporter_name: record.reporter_name.clone(),
        partner_name: record.partner_name.clone(),
        partner_iso3: record.partner_iso3.clone(),
        value: record.value,
    }
}

fn aggregate_by_partner<'a>(
    records: impl Iterator<Item = &'a ResolvedTrade>,
    selection: &Selection,
    year: &str,
) -> Vec<ViewRow> {
    let mut totals: BTreeMap<(&'a str, &'a str), f64> = BTreeMap::new();
    for record in records {
        *totals
            .entry((record.partner_name.as_str(), record.partner_iso3.as_str()))
            .or_insert(0.0) += record.value;
    }

    totals
        .into_iter()
        .map(|((partner_name, partner_iso3), value)| ViewRow {
            commodity_code: selection.commodity_code.clone(),
            period: None,
            year: year.to_string(),
            reporter_name: selection.reporter_name.clone(),
            partner_name: partner_name.to_string(),
            partner_iso3: partner_iso3.to_string(),
            value,
        })
        .collect()
}
