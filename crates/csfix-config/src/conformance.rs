//! Structural checks every ruleset must pass
//!
//! The checks are independent: running the suite collects every violation
//! instead of stopping at the first one, so a ruleset failing two checks
//! reports both. Messages name the ruleset and the offending fixers, and
//! pluralize correctly for one versus many.

use crate::provider::{FixerProvider, ProviderCache};
use crate::rules::RuleValue;
use crate::ruleset::Ruleset;

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the check that failed
    pub check: &'static str,
    pub message: String,
}

impl Violation {
    fn new(check: &'static str, message: String) -> Self {
        Self { check, message }
    }
}

/// Outcome of running the whole suite against one ruleset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConformanceReport {
    pub violations: Vec<Violation>,
}

impl ConformanceReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }
}

/// Run every check against a ruleset, computing its views through `cache`
pub fn run(ruleset: &dyn Ruleset, cache: &mut ProviderCache) -> ConformanceReport {
    let name = ruleset.name().to_string();
    let provider = cache.provider(ruleset);

    let mut violations = Vec::new();
    violations.extend(check_no_preset_entries(&name, provider));
    violations.extend(check_full_coverage(&name, provider));
    violations.extend(check_no_unknown_entries(&name, provider));
    violations.extend(check_alphabetical_order(&name, provider));
    violations.extend(check_header_comment_disabled(&name, provider));
    violations.extend(check_configurable_options_complete(&name, provider));

    ConformanceReport { violations }
}

fn quote_join(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check 1: presets must be expanded before a ruleset is stored
pub fn check_no_preset_entries(ruleset: &str, provider: &FixerProvider) -> Vec<Violation> {
    let mut presets: Vec<&str> = provider
        .enabled()
        .iter()
        .map(|(name, _)| name)
        .filter(|name| name.starts_with('@'))
        .collect();
    presets.sort_unstable();

    if presets.is_empty() {
        return Vec::new();
    }

    vec![Violation::new(
        "no_preset_entries",
        format!(
            "the \"{}\" ruleset uses rule {} (presets) as fixers: {}",
            ruleset,
            if presets.len() > 1 { "sets" } else { "set" },
            quote_join(&presets),
        ),
    )]
}

/// Check 2: the ruleset must take a stance on every built-in fixer
pub fn check_full_coverage(ruleset: &str, provider: &FixerProvider) -> Vec<Violation> {
    let mut missing: Vec<&str> = provider
        .builtin()
        .keys()
        .filter(|name| !provider.configured().iter().any(|c| c == *name))
        .copied()
        .collect();
    missing.sort_unstable();

    if missing.is_empty() {
        return Vec::new();
    }

    let many = missing.len() > 1;
    vec![Violation::new(
        "full_coverage",
        format!(
            "non-deprecated built-in {} {} {} not configured in the \"{}\" ruleset",
            if many { "fixers" } else { "fixer" },
            quote_join(&missing),
            if many { "are" } else { "is" },
            ruleset,
        ),
    )]
}

/// Check 3: every configured fixer must be built in and not deprecated
pub fn check_no_unknown_entries(ruleset: &str, provider: &FixerProvider) -> Vec<Violation> {
    let mut unknown: Vec<&str> = provider
        .configured()
        .iter()
        .map(String::as_str)
        .filter(|name| !provider.builtin().contains_key(name))
        .collect();
    unknown.sort_unstable();

    if unknown.is_empty() {
        return Vec::new();
    }

    let many = unknown.len() > 1;
    vec![Violation::new(
        "no_unknown_entries",
        format!(
            "{} {} configured in the \"{}\" ruleset {} not built in or {} deprecated",
            if many { "fixers" } else { "fixer" },
            quote_join(&unknown),
            ruleset,
            if many { "are" } else { "is" },
            if many { "are" } else { "is" },
        ),
    )]
}

/// Check 4: the ruleset source must stay sorted by fixer name
pub fn check_alphabetical_order(ruleset: &str, provider: &FixerProvider) -> Vec<Violation> {
    let configured = provider.configured();
    let mut sorted: Vec<&String> = configured.iter().collect();
    sorted.sort_unstable();

    if sorted.iter().zip(configured).all(|(a, b)| *a == b) {
        return Vec::new();
    }

    vec![Violation::new(
        "alphabetical_order",
        format!("the fixers in the \"{ruleset}\" ruleset are not sorted by name"),
    )]
}

/// Check 5: rulesets must not impose a copyright header; that is opt-in
/// per project through the factory
pub fn check_header_comment_disabled(ruleset: &str, provider: &FixerProvider) -> Vec<Violation> {
    match provider.enabled().get("header_comment") {
        Some(value) if value.is_disabled() => Vec::new(),
        Some(_) => vec![Violation::new(
            "header_comment_disabled",
            format!("the \"header_comment\" fixer must be disabled in the \"{ruleset}\" ruleset"),
        )],
        None => vec![Violation::new(
            "header_comment_disabled",
            format!("the \"{ruleset}\" ruleset does not configure the \"header_comment\" fixer"),
        )],
    }
}

/// Check 6: a fixer enabled with explicit options must use every
/// non-deprecated option, and nothing else
pub fn check_configurable_options_complete(
    ruleset: &str,
    provider: &FixerProvider,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (name, info) in provider.builtin() {
        if !info.is_configurable() {
            continue;
        }

        let Some(options) = provider.enabled().get(name).and_then(RuleValue::options) else {
            // Disabled, enabled bare, or absent: nothing to verify
            continue;
        };

        let used: Vec<&str> = options.keys().map(String::as_str).collect();
        let current = info.current_options();
        let deprecated = info.deprecated_options();

        let missing: Vec<&str> = current
            .iter()
            .filter(|option| !used.contains(*option))
            .copied()
            .collect();
        let deprecated_used: Vec<&str> = deprecated
            .iter()
            .filter(|option| used.contains(*option))
            .copied()
            .collect();
        let extra: Vec<&str> = used
            .iter()
            .filter(|option| !current.contains(*option) && !deprecated.contains(*option))
            .copied()
            .collect();

        if !missing.is_empty() {
            let many = missing.len() > 1;
            violations.push(Violation::new(
                "configurable_options_complete",
                format!(
                    "the \"{}\" fixer in the \"{}\" ruleset is missing {} {}",
                    name,
                    ruleset,
                    if many { "options" } else { "option" },
                    quote_join(&missing),
                ),
            ));
        }
        if !deprecated_used.is_empty() {
            let many = deprecated_used.len() > 1;
            violations.push(Violation::new(
                "configurable_options_complete",
                format!(
                    "the \"{}\" fixer in the \"{}\" ruleset uses deprecated {} {}",
                    name,
                    ruleset,
                    if many { "options" } else { "option" },
                    quote_join(&deprecated_used),
                ),
            ));
        }
        if !extra.is_empty() {
            let many = extra.len() > 1;
            violations.push(Violation::new(
                "configurable_options_complete",
                format!(
                    "the \"{}\" fixer in the \"{}\" ruleset uses {} {} not defined by the engine",
                    name,
                    ruleset,
                    if many { "options" } else { "option" },
                    quote_join(&extra),
                ),
            ));
        }
    }

    violations
}
