//! Tests for two-tier country resolution

use super::*;
use crate::app::models::Resolution;
use crate::app::services::country_resolver::{
    CountryResolver, ResolutionCache, ResolutionSource,
};
use std::collections::BTreeMap;
use std::sync::Arc;

#[test]
fn test_override_table_resolves_known_variants() {
    let resolver = CountryResolver::with_default_lookup();

    assert_eq!(resolver.resolve("Korea, Rep.").code(), Some("KOR"));
    assert_eq!(resolver.resolve("Republic of Korea").code(), Some("KOR"));
    assert_eq!(resolver.resolve("China, Hong Kong SAR").code(), Some("HKG"));
    assert_eq!(
        resolver.resolve("Iran (Islamic Republic of)").code(),
        Some("IRN")
    );
    assert_eq!(resolver.resolve("Turkiye").code(), Some("TUR"));
    assert_eq!(resolver.resolve("Cote d'Ivoire").code(), Some("CIV"));
    assert_eq!(resolver.resolve("Dem. Rep. of the Congo").code(), Some("COD"));
    assert_eq!(resolver.resolve("Other Asia, nes").code(), Some("OWA"));
    assert_eq!(resolver.resolve("Kosovo").code(), Some("XKX"));
}

#[test]
fn test_override_wins_over_generic_lookup() {
    // A lookup that would map Hong Kong to China
    let lookup = MockLookup::with(&[("China, Hong Kong SAR", "CHN"), ("Korea, Rep.", "PRK")]);
    let resolver = CountryResolver::new(Arc::new(lookup));

    let (resolution, source) = resolver.resolve_with_source("China, Hong Kong SAR");
    assert_eq!(resolution, Resolution::Resolved("HKG".to_string()));
    assert_eq!(source, ResolutionSource::Override);
    assert_eq!(resolver.resolve("Korea, Rep.").code(), Some("KOR"));
}

#[test]
fn test_generic_lookup_fallback() {
    let resolver = CountryResolver::with_default_lookup();

    let (resolution, source) = resolver.resolve_with_source("Chile");
    assert_eq!(resolution.code(), Some("CHL"));
    assert_eq!(source, ResolutionSource::Lookup);

    assert_eq!(resolver.resolve("japan").code(), Some("JPN"));
    assert_eq!(resolver.resolve("Australia").code(), Some("AUS"));
}

#[test]
fn test_unresolvable_name() {
    let resolver = CountryResolver::new(Arc::new(MockLookup::default()));

    let (resolution, source) = resolver.resolve_with_source("Atlantis");
    assert_eq!(resolution, Resolution::Unresolved);
    assert_eq!(source, ResolutionSource::Unresolved);

    let resolver = CountryResolver::with_default_lookup();
    assert_eq!(resolver.resolve("Areas, nes"), Resolution::Unresolved);
    assert_eq!(resolver.resolve("World"), Resolution::Unresolved);
}

#[test]
fn test_override_match_is_exact() {
    let resolver = CountryResolver::new(Arc::new(MockLookup::default()));

    assert!(resolver.has_override("Korea, Rep."));
    assert!(!resolver.has_override("korea, rep."));
    assert_eq!(resolver.resolve("korea, rep."), Resolution::Unresolved);
}

#[test]
fn test_extra_overrides() {
    let mut extra = BTreeMap::new();
    extra.insert("Neth. Antilles".to_string(), "ant".to_string());
    extra.insert("Korea, Rep.".to_string(), "KOR".to_string());

    let resolver = CountryResolver::with_default_lookup()
        .with_extra_overrides(&extra)
        .unwrap();

    assert_eq!(resolver.resolve("Neth. Antilles").code(), Some("ANT"));
    assert_eq!(resolver.override_count(), 24);
}

#[test]
fn test_extra_overrides_reject_bad_codes() {
    let mut extra = BTreeMap::new();
    extra.insert("Somewhere".to_string(), "SOMEWHERE".to_string());

    let result = CountryResolver::with_default_lookup().with_extra_overrides(&extra);
    assert!(result.is_err());
}

#[test]
fn test_resolution_cache_memoizes() {
    let resolver = CountryResolver::with_default_lookup();
    let mut cache = ResolutionCache::new(&resolver);

    let first = cache.resolve("Chile");
    let second = cache.resolve("Chile");
    let third = cache.resolve("Korea, Rep.");

    assert_eq!(first, second);
    assert_eq!(third.1, ResolutionSource::Override);
    assert_eq!(cache.distinct_names(), 2);
}
