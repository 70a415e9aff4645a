//! The strict ruleset, for codebases that accept risky fixes

use csfix_config::{OptionValue, RuleMap, RuleValue, Ruleset};

use crate::Standard;

/// Everything in [`Standard`] plus the risky fixers, with risky mode
/// auto-activated.
pub struct Strict;

impl Ruleset for Strict {
    fn name(&self) -> &str {
        "strict"
    }

    fn required_version(&self) -> u32 {
        30_100
    }

    fn auto_risky_allowed(&self) -> bool {
        true
    }

    fn rules(&self) -> RuleMap {
        // Overriding keeps each entry's position, so the table stays
        // alphabetical.
        let mut rules = Standard.rules();

        rules.insert("declare_strict_types", RuleValue::enabled());
        rules.insert(
            "no_alias_functions",
            RuleValue::configured([("sets", OptionValue::list(["@all"]))]),
        );
        rules.insert("strict_comparison", RuleValue::enabled());

        rules
    }
}
