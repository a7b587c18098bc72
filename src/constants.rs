//! Application constants for the trade atlas
//!
//! This module contains column names, default sources, the country override
//! table and the commodity description table used throughout the application.

// =============================================================================
// Column Names
// =============================================================================

/// Normalized column names expected in a COMTRADE extract
pub mod columns {
    /// Reporting period, `YYYYMM` or `YYYY-MM`
    pub const PERIOD: &str = "period";

    /// Harmonized System commodity code
    pub const COMMODITY_CODE: &str = "cmdcode";

    /// Reporting country display name
    pub const REPORTER: &str = "reporterdesc";

    /// Partner country display name
    pub const PARTNER: &str = "partnerdesc";

    /// Trade value in the reported unit (usually USD)
    pub const PRIMARY_VALUE: &str = "primaryvalue";

    /// Text columns whose cells are trimmed during normalization
    pub const TEXT_COLUMNS: &[&str] = &[PERIOD, COMMODITY_CODE, REPORTER, PARTNER];

    /// Columns the record builder reads
    pub const REQUIRED: &[&str] = &[PERIOD, COMMODITY_CODE, REPORTER, PARTNER, PRIMARY_VALUE];
}

/// Byte-order mark that spreadsheet exports leave in front of the first header
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Number of leading period characters that form the year
pub const YEAR_PREFIX_LEN: usize = 4;

// =============================================================================
// Data Sources
// =============================================================================

/// Default remote location of the filtered COMTRADE extract
pub const DEFAULT_REMOTE_URL: &str =
    "https://drive.google.com/uc?id=1WtkYFRNwlURmXJbLCsd4Ff0-GmtQoSHa&export=download";

/// Default local dataset file name (also used for the download cache)
pub const DEFAULT_DATASET_FILE: &str = "dataset_filtered_80.csv";

/// Application directory name under the platform config/cache dirs
pub const APP_DIR_NAME: &str = "trade-atlas";

/// Configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TRADE_ATLAS_";

/// Timeout for the single remote download attempt
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// Presentation Defaults
// =============================================================================

/// Default continuous color scale for the choropleth (darker = larger)
pub const DEFAULT_COLOR_SCALE: &str = "Viridis_r";

/// Map projection handed to the charting layer
pub const DEFAULT_PROJECTION: &str = "natural earth";

/// Data source caption shown under views
pub const SOURCE_CAPTION: &str = "Source: UN COMTRADE Database";

// =============================================================================
// Country Overrides
// =============================================================================

/// Name variants whose generic ISO lookup is missing or wrong
///
/// Checked before any generic lookup. Covers naming drift across data
/// vintages ("Korea, Rep." vs "Republic of Korea"), parenthetical and comma
/// qualifiers, ASCII spellings of diacritic names, and COMTRADE-only areas.
pub const COUNTRY_OVERRIDES: &[(&str, &str)] = &[
    ("Korea, Rep.", "KOR"),
    ("Republic of Korea", "KOR"),
    ("United States", "USA"),
    ("USA", "USA"),
    ("Russian Federation", "RUS"),
    ("Viet Nam", "VNM"),
    ("Iran (Islamic Republic of)", "IRN"),
    ("Dem. Rep. of the Congo", "COD"),
    ("Congo", "COG"),
    ("Iran", "IRN"),
    ("Turkiye", "TUR"),
    ("United Kingdom", "GBR"),
    ("Brunei Darussalam", "BRN"),
    ("Cote d'Ivoire", "CIV"),
    ("New Caledonia", "NCL"),
    ("Bolivia (Plurinational State of)", "BOL"),
    ("Other Asia, nes", "OWA"),
    ("Palestine", "PSE"),
    ("Kosovo", "XKX"),
    ("Taiwan", "TWN"),
    ("Czechia", "CZE"),
    ("Dominican Rep.", "DOM"),
    ("China, Hong Kong SAR", "HKG"),
];

// =============================================================================
// Commodity Descriptions
// =============================================================================

/// HS codes of the lithium and cobalt supply chain with bilingual descriptions
pub const COMMODITY_DESCRIPTIONS: &[(&str, &str)] = &[
    ("253090", "기타 광물 (리튬 광석 포함) / Mineral substances n.e.c. (incl. lithium ores)"),
    ("260500", "코발트 광과 그 정광 / Cobalt ores and concentrates"),
    ("282200", "코발트 산화물과 수산화물 / Cobalt oxides and hydroxides"),
    ("282520", "리튬 산화물과 수산화물 / Lithium oxide and hydroxide"),
    ("282739", "기타 염화물 (염화코발트 포함) / Other chlorides (incl. cobalt chloride)"),
    ("283329", "기타 황산염 (황산코발트 포함) / Other sulphates (incl. cobalt sulphate)"),
    ("283691", "탄산리튬 / Lithium carbonates"),
    ("810520", "코발트 매트, 괴, 분 / Cobalt mattes, unwrought cobalt and powders"),
    ("810530", "코발트 웨이스트와 스크랩 / Cobalt waste and scrap"),
    ("810590", "기타 코발트 제품 / Other cobalt articles"),
    ("850650", "리튬 일차전지 / Lithium primary cells and batteries"),
    ("850760", "리튬이온 축전지 / Lithium-ion accumulators"),
];
