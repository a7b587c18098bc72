//! Test utilities for country resolution
//!
//! Provides a fixed-answer lookup so resolver tests do not depend on the
//! contents of the ISO 3166 registry.

use super::CountryLookup;
use std::collections::HashMap;

mod resolver_tests;

/// Lookup that answers from a fixed map and counts nothing else
#[derive(Debug, Default)]
pub struct MockLookup {
    answers: HashMap<String, String>,
}

impl MockLookup {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            answers: entries
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string()))
                .collect(),
        }
    }
}

impl CountryLookup for MockLookup {
    fn lookup_alpha3(&self, name: &str) -> Option<String> {
        self.answers.get(name).cloned()
    }
}
