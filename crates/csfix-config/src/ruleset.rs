//! Ruleset contract

use crate::rules::RuleMap;

/// A named, versioned bundle of rule configurations
///
/// Rulesets are immutable data: `rules()` returns a fresh copy of the
/// table and nothing in this crate mutates a ruleset after construction.
pub trait Ruleset {
    /// Human-readable identifier, unique per ruleset
    fn name(&self) -> &str;

    /// Minimum engine `VERSION_ID` this ruleset supports
    fn required_version(&self) -> u32 {
        0
    }

    /// Whether risky rules are activated when the caller gives no
    /// explicit `risky_allowed` option
    fn auto_risky_allowed(&self) -> bool {
        false
    }

    /// The rule table, in authoring order
    fn rules(&self) -> RuleMap;
}
