//! The default ruleset for projects and libraries

use csfix_config::{OptionValue, RuleMap, RuleValue, Ruleset};

/// Non-risky house style: every built-in fixer gets an explicit stance,
/// risky fixers stay off.
pub struct Standard;

impl Ruleset for Standard {
    fn name(&self) -> &str {
        "standard"
    }

    fn required_version(&self) -> u32 {
        30_000
    }

    fn rules(&self) -> RuleMap {
        let mut rules = RuleMap::new();

        rules.insert("array_indentation", RuleValue::enabled());
        rules.insert(
            "array_syntax",
            RuleValue::configured([("syntax", "short")]),
        );
        rules.insert(
            "binary_operator_spaces",
            RuleValue::configured([
                ("default", OptionValue::from("single_space")),
                ("operators", OptionValue::map([("=>", "single_space")])),
            ]),
        );
        rules.insert("blank_line_after_namespace", RuleValue::enabled());
        rules.insert("blank_line_after_opening_tag", RuleValue::enabled());
        rules.insert(
            "blank_line_before_statement",
            RuleValue::configured([("statements", OptionValue::list(["return"]))]),
        );
        rules.insert(
            "braces_position",
            RuleValue::configured([
                ("control_structures_opening_brace", "same_line"),
                ("functions_opening_brace", "next_line_unless_newline_at_signature_end"),
            ]),
        );
        rules.insert("cast_spaces", RuleValue::configured([("space", "single")]));
        rules.insert(
            "class_definition",
            RuleValue::configured([
                ("single_line", OptionValue::from(false)),
                ("space_before_parenthesis", OptionValue::from(false)),
            ]),
        );
        rules.insert("concat_space", RuleValue::configured([("spacing", "one")]));
        rules.insert("constant_case", RuleValue::configured([("case", "lower")]));
        rules.insert(
            "declare_equal_normalize",
            RuleValue::configured([("space", "none")]),
        );
        rules.insert("declare_strict_types", RuleValue::disabled());
        rules.insert("elseif", RuleValue::enabled());
        rules.insert("encoding", RuleValue::enabled());
        rules.insert("full_opening_tag", RuleValue::enabled());
        rules.insert(
            "function_declaration",
            RuleValue::configured([
                ("closure_fn_spacing", "one"),
                ("closure_function_spacing", "one"),
            ]),
        );
        rules.insert("header_comment", RuleValue::disabled());
        rules.insert(
            "increment_style",
            RuleValue::configured([("style", "post")]),
        );
        rules.insert("indentation_type", RuleValue::enabled());
        rules.insert("line_ending", RuleValue::enabled());
        rules.insert("lowercase_keywords", RuleValue::enabled());
        rules.insert("lowercase_static_reference", RuleValue::enabled());
        rules.insert(
            "method_argument_space",
            RuleValue::configured([
                ("keep_multiple_spaces_after_comma", OptionValue::from(false)),
                ("on_multiline", OptionValue::from("ensure_fully_multiline")),
            ]),
        );
        rules.insert("no_alias_functions", RuleValue::disabled());
        rules.insert("no_closing_tag", RuleValue::enabled());
        rules.insert(
            "no_extra_blank_lines",
            RuleValue::configured([("tokens", OptionValue::list(["extra"]))]),
        );
        rules.insert("no_trailing_whitespace", RuleValue::enabled());
        rules.insert("no_unused_imports", RuleValue::enabled());
        rules.insert("no_whitespace_in_blank_line", RuleValue::enabled());
        rules.insert(
            "ordered_imports",
            RuleValue::configured([
                (
                    "imports_order",
                    OptionValue::list(["class", "function", "const"]),
                ),
                ("sort_algorithm", OptionValue::from("alpha")),
            ]),
        );
        rules.insert("single_blank_line_at_end_of_file", RuleValue::enabled());
        rules.insert(
            "single_quote",
            RuleValue::configured([("strings_containing_single_quote_chars", false)]),
        );
        rules.insert("strict_comparison", RuleValue::disabled());
        rules.insert(
            "trailing_comma_in_multiline",
            RuleValue::configured([("elements", OptionValue::list(["arrays"]))]),
        );
        rules.insert(
            "visibility_required",
            RuleValue::configured([("elements", OptionValue::list(["const", "method", "property"]))]),
        );
        rules.insert(
            "yoda_style",
            RuleValue::configured([
                ("always_move_variable", false),
                ("equal", false),
                ("identical", false),
                ("less_and_greater", false),
            ]),
        );

        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(Standard.name(), "standard");
        assert!(Standard.required_version() <= csfix_config::VERSION_ID);
        assert!(!Standard.auto_risky_allowed());
    }

    #[test]
    fn test_risky_fixers_are_disabled() {
        let rules = Standard.rules();

        assert_eq!(rules.get("declare_strict_types"), Some(&RuleValue::disabled()));
        assert_eq!(rules.get("no_alias_functions"), Some(&RuleValue::disabled()));
        assert_eq!(rules.get("strict_comparison"), Some(&RuleValue::disabled()));
    }

    #[test]
    fn test_header_comment_is_disabled() {
        assert_eq!(
            Standard.rules().get("header_comment"),
            Some(&RuleValue::disabled())
        );
    }
}
