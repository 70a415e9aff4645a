//! Derived fixer views used to validate rulesets
//!
//! [`FixerProvider`] computes, for one ruleset, the three views the
//! conformance suite works with: the engine's built-in catalog, the names
//! the ruleset configures, and the resolved rule map with presets
//! expanded. [`ProviderCache`] memoizes providers per ruleset name so a
//! test suite computes each one once; the cache is an explicit object the
//! caller owns and resets, never process-wide state.

use std::collections::{BTreeMap, HashMap};

use crate::presets;
use crate::registry::{FixerInfo, FixerRegistry};
use crate::rules::RuleMap;
use crate::ruleset::Ruleset;

/// Derived views over one ruleset
pub struct FixerProvider {
    builtin: BTreeMap<&'static str, &'static FixerInfo>,
    configured: Vec<String>,
    enabled: RuleMap,
}

impl FixerProvider {
    pub fn create(ruleset: &dyn Ruleset) -> Self {
        let rules = ruleset.rules();
        let registry = FixerRegistry::new();

        Self {
            builtin: registry.builtin(),
            configured: rules.names().iter().map(|s| s.to_string()).collect(),
            enabled: presets::expand(&rules),
        }
    }

    /// Every non-deprecated fixer the engine ships, keyed by name
    pub fn builtin(&self) -> &BTreeMap<&'static str, &'static FixerInfo> {
        &self.builtin
    }

    /// Rule names the ruleset configures, in authoring order
    pub fn configured(&self) -> &[String] {
        &self.configured
    }

    /// The rule map with known presets expanded
    ///
    /// Disabled entries are retained: the conformance suite asserts that
    /// `header_comment` is present and exactly `false`.
    pub fn enabled(&self) -> &RuleMap {
        &self.enabled
    }
}

/// Caller-owned cache of providers, keyed by ruleset name
#[derive(Default)]
pub struct ProviderCache {
    entries: HashMap<String, FixerProvider>,
}

impl ProviderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider for a ruleset, computed once per ruleset name
    pub fn provider(&mut self, ruleset: &dyn Ruleset) -> &FixerProvider {
        self.entries
            .entry(ruleset.name().to_string())
            .or_insert_with(|| FixerProvider::create(ruleset))
    }

    /// Drop every cached provider
    ///
    /// Must be called between independent test runs so rulesets do not
    /// leak state into each other.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
