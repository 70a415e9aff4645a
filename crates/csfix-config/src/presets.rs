//! Preset expansion
//!
//! A preset is a `@`-prefixed alias for a bundle of fixers. Stored rulesets
//! are expected to spell every fixer out; presets only appear in ad-hoc
//! override layers and are expanded before validation. Unknown presets are
//! left in place so the conformance suite can flag them.

use crate::rules::{RuleMap, RuleValue};

/// PSR-12 preset
pub const PSR12_RULES: &[&str] = &[
    "blank_line_after_namespace",
    "blank_line_after_opening_tag",
    "braces_position",
    "class_definition",
    "constant_case",
    "declare_equal_normalize",
    "elseif",
    "encoding",
    "full_opening_tag",
    "function_declaration",
    "indentation_type",
    "line_ending",
    "lowercase_keywords",
    "lowercase_static_reference",
    "method_argument_space",
    "no_closing_tag",
    "no_trailing_whitespace",
    "no_whitespace_in_blank_line",
    "ordered_imports",
    "single_blank_line_at_end_of_file",
    "visibility_required",
];

/// PER-CS preset, the evolution of PSR-12
pub const PER_CS_RULES: &[&str] = &[
    "array_syntax",
    "blank_line_after_namespace",
    "blank_line_after_opening_tag",
    "braces_position",
    "cast_spaces",
    "class_definition",
    "concat_space",
    "constant_case",
    "declare_equal_normalize",
    "elseif",
    "encoding",
    "full_opening_tag",
    "function_declaration",
    "indentation_type",
    "line_ending",
    "lowercase_keywords",
    "lowercase_static_reference",
    "method_argument_space",
    "no_closing_tag",
    "no_trailing_whitespace",
    "no_whitespace_in_blank_line",
    "ordered_imports",
    "single_blank_line_at_end_of_file",
    "single_quote",
    "trailing_comma_in_multiline",
    "visibility_required",
];

/// Constituent fixers of a preset name, `@` prefix included
pub fn preset_rules(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "@PSR12" | "@PSR-12" => Some(PSR12_RULES),
        "@PER" | "@PER-CS" => Some(PER_CS_RULES),
        _ => None,
    }
}

/// Expand every known preset entry into its constituent fixers
///
/// Constituents inherit the preset's flag: an enabled preset enables each
/// constituent with defaults, a disabled preset disables them. Later
/// entries in the input override expanded constituents (last write wins).
/// Unknown preset names pass through unchanged.
pub fn expand(rules: &RuleMap) -> RuleMap {
    let mut expanded = RuleMap::new();

    for (name, value) in rules.iter() {
        if let Some(constituents) = name.starts_with('@').then(|| preset_rules(name)).flatten() {
            let flag = if value.is_disabled() {
                RuleValue::disabled()
            } else {
                RuleValue::enabled()
            };
            for constituent in constituents {
                expanded.insert(*constituent, flag.clone());
            }
        } else {
            expanded.insert(name, value.clone());
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert!(preset_rules("@PSR12").is_some());
        assert!(preset_rules("@PER-CS").is_some());
        assert!(preset_rules("@Unknown").is_none());
        assert!(preset_rules("PSR12").is_none());
    }

    #[test]
    fn test_expand_known_preset() {
        let rules: RuleMap = [("@PSR12", RuleValue::enabled())].into_iter().collect();
        let expanded = expand(&rules);

        assert!(!expanded.contains("@PSR12"));
        assert_eq!(expanded.get("elseif"), Some(&RuleValue::enabled()));
        assert_eq!(expanded.len(), PSR12_RULES.len());
    }

    #[test]
    fn test_later_entries_override_expansion() {
        let rules: RuleMap = [
            ("@PSR12", RuleValue::enabled()),
            ("elseif", RuleValue::disabled()),
        ]
        .into_iter()
        .collect();
        let expanded = expand(&rules);

        assert_eq!(expanded.get("elseif"), Some(&RuleValue::disabled()));
        assert_eq!(expanded.get("encoding"), Some(&RuleValue::enabled()));
    }

    #[test]
    fn test_unknown_preset_passes_through() {
        let rules: RuleMap = [("@Bogus", RuleValue::enabled())].into_iter().collect();
        let expanded = expand(&rules);

        assert!(expanded.contains("@Bogus"));
    }

    #[test]
    fn test_disabled_preset_disables_constituents() {
        let rules: RuleMap = [("@PER-CS", RuleValue::disabled())].into_iter().collect();
        let expanded = expand(&rules);

        assert_eq!(expanded.get("single_quote"), Some(&RuleValue::disabled()));
    }
}
