//! Commodity description lookup
//!
//! Maps HS codes to the bilingual descriptions shown next to a selection.
//! An unknown code is informational only and never fails a command.

use crate::constants::COMMODITY_DESCRIPTIONS;
use serde::Serialize;
use std::fmt;

/// Result of a description lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "description", rename_all = "lowercase")]
pub enum CommodityDescription {
    Known(&'static str),
    Missing,
}

impl CommodityDescription {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn text(&self) -> Option<&'static str> {
        match self {
            Self::Known(text) => Some(text),
            Self::Missing => None,
        }
    }
}

/// Look up the description of a commodity code (trimmed, exact match)
pub fn describe(code: &str) -> CommodityDescription {
    let code = code.trim();
    COMMODITY_DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, text)| CommodityDescription::Known(text))
        .unwrap_or(CommodityDescription::Missing)
}

/// Banner line for a code: its description, or a missing-description notice
pub fn description_banner(code: &str) -> String {
    match describe(code) {
        CommodityDescription::Known(text) => format!("HS {}: {}", code.trim(), text),
        CommodityDescription::Missing => missing_notice(code),
    }
}

/// Notice shown when a code has no description
pub fn missing_notice(code: &str) -> String {
    format!("HS {}: 설명 없음 / no description available", code.trim())
}

/// Every known code with its description, in code order
pub fn known_commodities() -> impl Iterator<Item = (&'static str, &'static str)> {
    COMMODITY_DESCRIPTIONS.iter().copied()
}

impl fmt::Display for CommodityDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(text) => write!(f, "{}", text),
            Self::Missing => write!(f, "no description available"),
        }
    }
}
