//! Generic country-name lookup
//!
//! The second tier of country resolution. Anything implementing
//! [`CountryLookup`] can back the resolver; the default asks the `celes`
//! ISO 3166-1 registry.

use celes::Country;
use std::fmt;
use std::str::FromStr;

/// Capability to map a country name (or code) to an ISO3 code
pub trait CountryLookup: Send + Sync + fmt::Debug {
    /// Look up the alpha-3 code for a name, or `None` when unknown
    fn lookup_alpha3(&self, name: &str) -> Option<String>;
}

/// ISO 3166-1 lookup backed by the `celes` registry
///
/// Matches alpha-2, alpha-3, numeric codes, long names and aliases
/// case-insensitively. A multi-word name that misses is retried with its
/// whitespace removed, the form `celes` uses for aliases. Qualified
/// statistical names such as "Korea, Rep." or "China, Hong Kong SAR" do not
/// match and belong in the override table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso3166Lookup;

impl Iso3166Lookup {
    pub fn new() -> Self {
        Self
    }

    /// Look up the full registry entry for a name or code
    pub fn find(&self, name: &str) -> Option<Country> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        Country::from_str(name).ok().or_else(|| {
            let compact: String = name.split_whitespace().collect();
            if compact == name {
                None
            } else {
                Country::from_str(&compact).ok()
            }
        })
    }
}

impl CountryLookup for Iso3166Lookup {
    fn lookup_alpha3(&self, name: &str) -> Option<String> {
        self.find(name).map(|country| country.alpha3.to_string())
    }
}
