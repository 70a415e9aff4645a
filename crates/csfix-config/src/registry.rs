//! Catalog of the engine's built-in fixers
//!
//! The engine ships a fixed set of fixers; this module mirrors that set as
//! static data so rulesets can be validated without invoking the engine.
//! Deprecated fixers stay in the table (the engine still accepts them) but
//! are excluded from the "built-in" view rulesets must cover.

use std::collections::{BTreeMap, HashMap};

/// Version identifier of the engine this catalog was generated from,
/// encoded as `major * 10_000 + minor * 100 + patch`.
pub const VERSION_ID: u32 = 30_400;

/// A single configurable option of a built-in fixer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionInfo {
    pub name: &'static str,
    pub deprecated: bool,
}

const fn option(name: &'static str) -> OptionInfo {
    OptionInfo {
        name,
        deprecated: false,
    }
}

const fn deprecated_option(name: &'static str) -> OptionInfo {
    OptionInfo {
        name,
        deprecated: true,
    }
}

/// Description of a built-in fixer as the engine declares it
#[derive(Debug, Clone, Copy)]
pub struct FixerInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub risky: bool,
    pub deprecated: bool,
    pub options: &'static [OptionInfo],
}

impl FixerInfo {
    /// Whether the fixer accepts configuration options
    pub fn is_configurable(&self) -> bool {
        !self.options.is_empty()
    }

    /// Names of the options that are not deprecated
    pub fn current_options(&self) -> Vec<&'static str> {
        self.options
            .iter()
            .filter(|option| !option.deprecated)
            .map(|option| option.name)
            .collect()
    }

    /// Names of the options that are deprecated
    pub fn deprecated_options(&self) -> Vec<&'static str> {
        self.options
            .iter()
            .filter(|option| option.deprecated)
            .map(|option| option.name)
            .collect()
    }
}

const fn fixer(name: &'static str, description: &'static str) -> FixerInfo {
    FixerInfo {
        name,
        description,
        risky: false,
        deprecated: false,
        options: &[],
    }
}

const fn configurable(
    name: &'static str,
    description: &'static str,
    options: &'static [OptionInfo],
) -> FixerInfo {
    FixerInfo {
        name,
        description,
        risky: false,
        deprecated: false,
        options,
    }
}

const fn risky(name: &'static str, description: &'static str) -> FixerInfo {
    FixerInfo {
        name,
        description,
        risky: true,
        deprecated: false,
        options: &[],
    }
}

const fn risky_configurable(
    name: &'static str,
    description: &'static str,
    options: &'static [OptionInfo],
) -> FixerInfo {
    FixerInfo {
        name,
        description,
        risky: true,
        deprecated: false,
        options,
    }
}

const fn deprecated(
    name: &'static str,
    description: &'static str,
    options: &'static [OptionInfo],
) -> FixerInfo {
    FixerInfo {
        name,
        description,
        risky: false,
        deprecated: true,
        options,
    }
}

/// Every fixer the engine knows about, sorted by name
static BUILTIN_FIXERS: &[FixerInfo] = &[
    fixer("array_indentation", "Indent array elements one level deeper than their opener"),
    configurable("array_syntax", "Use the configured syntax for array literals", &[option("syntax")]),
    configurable(
        "binary_operator_spaces",
        "Normalize spacing around binary operators",
        &[option("default"), option("operators")],
    ),
    fixer("blank_line_after_namespace", "Exactly one blank line after the namespace declaration"),
    fixer("blank_line_after_opening_tag", "A blank line must follow the opening tag"),
    configurable(
        "blank_line_before_statement",
        "Insert a blank line before the configured statements",
        &[option("statements")],
    ),
    deprecated(
        "braces",
        "Superseded by braces_position",
        &[option("position_after_control_structures"), option("position_after_functions_and_oop_constructs")],
    ),
    configurable(
        "braces_position",
        "Place braces according to the configured positions",
        &[option("control_structures_opening_brace"), option("functions_opening_brace")],
    ),
    configurable("cast_spaces", "Normalize spacing between a cast and its operand", &[option("space")]),
    configurable(
        "class_definition",
        "Normalize whitespace in class, interface and trait definitions",
        &[option("single_line"), option("space_before_parenthesis")],
    ),
    configurable("concat_space", "Normalize spacing around the concatenation operator", &[option("spacing")]),
    configurable("constant_case", "Use the configured case for true, false and null", &[option("case")]),
    configurable(
        "declare_equal_normalize",
        "Normalize spacing around the equals sign in declare statements",
        &[option("space")],
    ),
    risky("declare_strict_types", "Force strict types declaration in every file"),
    fixer("elseif", "Replace else if with elseif"),
    fixer("encoding", "Source must be valid UTF-8 without a BOM"),
    fixer("full_opening_tag", "Use the full <?php opening tag"),
    configurable(
        "function_declaration",
        "Normalize spacing in function declarations",
        &[option("closure_fn_spacing"), option("closure_function_spacing")],
    ),
    deprecated("function_typehint_space", "Superseded by type_declaration_spaces", &[]),
    configurable(
        "header_comment",
        "Add, replace or remove a header comment",
        &[option("comment_type"), option("header"), option("location"), option("separate")],
    ),
    configurable("increment_style", "Use pre- or post-increment as configured", &[option("style")]),
    fixer("indentation_type", "Indent with the whitespace configured for the project"),
    fixer("line_ending", "Normalize line endings to the configured sequence"),
    fixer("lowercase_keywords", "Keywords must be lowercase"),
    fixer("lowercase_static_reference", "self, static and parent must be lowercase"),
    configurable(
        "method_argument_space",
        "Normalize spacing in argument lists",
        &[
            deprecated_option("ensure_fully_multiline"),
            option("keep_multiple_spaces_after_comma"),
            option("on_multiline"),
        ],
    ),
    risky_configurable(
        "no_alias_functions",
        "Replace alias functions with their master function",
        &[option("sets")],
    ),
    fixer("no_closing_tag", "Files containing only PHP must omit the closing tag"),
    configurable(
        "no_extra_blank_lines",
        "Remove extra blank lines around the configured tokens",
        &[option("tokens")],
    ),
    fixer("no_trailing_whitespace", "Remove trailing whitespace at the end of lines"),
    fixer("no_unused_imports", "Remove unused use statements"),
    fixer("no_whitespace_in_blank_line", "Blank lines must contain no whitespace"),
    configurable(
        "ordered_imports",
        "Order use statements as configured",
        &[
            deprecated_option("case_sensitive"),
            option("imports_order"),
            option("sort_algorithm"),
        ],
    ),
    fixer("single_blank_line_at_end_of_file", "End files with exactly one newline"),
    deprecated("single_blank_line_before_namespace", "Superseded by blank_lines_before_namespace", &[]),
    configurable(
        "single_quote",
        "Use single quotes for plain strings",
        &[option("strings_containing_single_quote_chars")],
    ),
    risky("strict_comparison", "Use === and !== instead of == and !="),
    configurable(
        "trailing_comma_in_multiline",
        "Add trailing commas to multiline constructs",
        &[deprecated_option("after_heredoc"), option("elements")],
    ),
    configurable(
        "visibility_required",
        "Require visibility on the configured class elements",
        &[option("elements")],
    ),
    configurable(
        "yoda_style",
        "Write comparisons in the configured style",
        &[
            option("always_move_variable"),
            option("equal"),
            option("identical"),
            option("less_and_greater"),
        ],
    ),
];

/// Index over the engine's fixer catalog
pub struct FixerRegistry {
    by_name: HashMap<&'static str, &'static FixerInfo>,
}

impl FixerRegistry {
    pub fn new() -> Self {
        let mut by_name = HashMap::new();
        for info in BUILTIN_FIXERS {
            by_name.insert(info.name, info);
        }
        Self { by_name }
    }

    /// Look up any fixer, including deprecated ones
    pub fn get(&self, name: &str) -> Option<&'static FixerInfo> {
        self.by_name.get(name).copied()
    }

    /// Every non-deprecated fixer, keyed by name
    pub fn builtin(&self) -> BTreeMap<&'static str, &'static FixerInfo> {
        BUILTIN_FIXERS
            .iter()
            .filter(|info| !info.deprecated)
            .map(|info| (info.name, info))
            .collect()
    }

    /// The full catalog in declaration order
    pub fn all(&self) -> impl Iterator<Item = &'static FixerInfo> {
        BUILTIN_FIXERS.iter()
    }
}

impl Default for FixerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
