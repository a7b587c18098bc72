//! Country resolver service for partner-name to ISO3 mapping
//!
//! Resolution is two-tier:
//!
//! 1. **Override table**: exact-string match against known COMTRADE name
//!    variants. Always wins, including over a generic match that would pick a
//!    different code.
//! 2. **Generic lookup**: a [`CountryLookup`] capability, by default the
//!    `celes` ISO 3166-1 registry behind [`lookup::Iso3166Lookup`].
//!
//! A name that neither tier knows yields [`Resolution::Unresolved`]; that is a
//! valid outcome and the owning record is simply excluded from views.

use crate::app::models::Resolution;
use crate::constants::COUNTRY_OVERRIDES;
use crate::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

pub mod lookup;

#[cfg(test)]
pub mod tests;

pub use lookup::{CountryLookup, Iso3166Lookup};

/// Which tier produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    Override,
    Lookup,
    Unresolved,
}

/// Two-tier partner-country resolver
#[derive(Debug, Clone)]
pub struct CountryResolver {
    /// Exact display name to ISO3 code
    overrides: HashMap<String, String>,

    /// Fallback name lookup
    lookup: Arc<dyn CountryLookup>,
}

impl CountryResolver {
    /// Create a resolver with the built-in override table and a custom lookup
    pub fn new(lookup: Arc<dyn CountryLookup>) -> Self {
        let overrides = COUNTRY_OVERRIDES
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect();
        Self { overrides, lookup }
    }

    /// Create a resolver with the built-in override table and ISO 3166 registry lookup
    pub fn with_default_lookup() -> Self {
        Self::new(Arc::new(Iso3166Lookup::new()))
    }

    /// Add configured overrides on top of the built-in table
    ///
    /// Codes must be three ASCII letters; they are stored upper-cased.
    pub fn with_extra_overrides(mut self, extra: &BTreeMap<String, String>) -> Result<Self> {
        for (name, code) in extra {
            let code = code.trim();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(Error::configuration(format!(
                    "Override for '{}' must be a three-letter ISO3 code, got '{}'",
                    name, code
                )));
            }
            debug!("Adding country override: '{}' -> {}", name, code);
            self.overrides
                .insert(name.trim().to_string(), code.to_ascii_uppercase());
        }
        Ok(self)
    }

    /// Resolve a partner display name to an ISO3 code
    pub fn resolve(&self, name: &str) -> Resolution {
        self.resolve_with_source(name).0
    }

    /// Resolve a name and report which tier answered
    pub fn resolve_with_source(&self, name: &str) -> (Resolution, ResolutionSource) {
        if let Some(code) = self.overrides.get(name) {
            return (Resolution::Resolved(code.clone()), ResolutionSource::Override);
        }

        match self.lookup.lookup_alpha3(name) {
            Some(code) => (Resolution::Resolved(code), ResolutionSource::Lookup),
            None => (Resolution::Unresolved, ResolutionSource::Unresolved),
        }
    }

    /// Check whether a name has an override entry
    pub fn has_override(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }

    /// Number of override entries
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl Default for CountryResolver {
    fn default() -> Self {
        Self::with_default_lookup()
    }
}

/// Per-load memo of resolutions keyed by display name
///
/// Datasets repeat the same few hundred partner names across many rows.
#[derive(Debug)]
pub struct ResolutionCache<'a> {
    resolver: &'a CountryResolver,
    cache: HashMap<String, (Resolution, ResolutionSource)>,
}

impl<'a> ResolutionCache<'a> {
    pub fn new(resolver: &'a CountryResolver) -> Self {
        Self {
            resolver,
            cache: HashMap::new(),
        }
    }

    /// Resolve through the cache
    pub fn resolve(&mut self, name: &str) -> (Resolution, ResolutionSource) {
        if let Some(hit) = self.cache.get(name) {
            return hit.clone();
        }
        let resolved = self.resolver.resolve_with_source(name);
        self.cache.insert(name.to_string(), resolved.clone());
        resolved
    }

    /// Number of distinct names seen
    pub fn distinct_names(&self) -> usize {
        self.cache.len()
    }
}
