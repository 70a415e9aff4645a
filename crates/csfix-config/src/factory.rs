//! Configuration factory
//!
//! Invoked from each project's csfix config to turn a ruleset, a set of
//! project overrides and an options bag into the final configuration
//! handed to the engine. Rules resolve through a strict last-write-wins
//! merge of three ordered layers: ruleset defaults, then overrides, then
//! caller-supplied custom rules.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::finder::FinderConfig;
use crate::fixer::CustomFixer;
use crate::registry;
use crate::rules::{RuleMap, RuleValue};
use crate::ruleset::Ruleset;
use crate::whitespace::{IndentStyle, LineEnding};

/// Caller-supplied options; every absent field gets a default at
/// [`Factory::create`]
#[derive(Default)]
pub struct Options {
    /// Cache file path, default `.csfix.cache`
    pub cache_file: Option<PathBuf>,
    /// Custom fixers to register with the engine
    pub custom_fixers: Vec<Box<dyn CustomFixer>>,
    /// File discovery, default [`FinderConfig::project_default`]
    pub finder: Option<FinderConfig>,
    /// Report format, default `txt`
    pub format: Option<String>,
    pub hide_progress: Option<bool>,
    pub indent: Option<IndentStyle>,
    pub line_ending: Option<LineEnding>,
    /// PHP binary the engine should run with
    pub php_executable: Option<PathBuf>,
    /// Default: the ruleset's `auto_risky_allowed`
    pub risky_allowed: Option<bool>,
    pub using_cache: Option<bool>,
    /// Highest-precedence rule layer of the base merge
    pub custom_rules: RuleMap,
}

/// Fully resolved configuration, consumed by the engine and never
/// mutated afterward
pub struct ResolvedConfig {
    pub ruleset_name: String,
    pub cache_file: PathBuf,
    pub custom_fixers: Vec<Box<dyn CustomFixer>>,
    pub finder: FinderConfig,
    pub format: String,
    pub hide_progress: bool,
    pub indent: IndentStyle,
    pub line_ending: LineEnding,
    pub php_executable: Option<PathBuf>,
    pub risky_allowed: bool,
    pub using_cache: bool,
    pub rules: RuleMap,
}

/// Prepares a ruleset and options before the final configuration is built
pub struct Factory {
    ruleset_name: String,
    cache_file: PathBuf,
    custom_fixers: Vec<Box<dyn CustomFixer>>,
    finder: FinderConfig,
    format: String,
    hide_progress: bool,
    indent: IndentStyle,
    line_ending: LineEnding,
    php_executable: Option<PathBuf>,
    risky_allowed: bool,
    using_cache: bool,
    rules: RuleMap,
}

impl Factory {
    /// Resolve every option and merge the rule layers
    ///
    /// Fails only when the engine is older than the ruleset requires;
    /// every other input is defaulted rather than rejected.
    pub fn create(
        ruleset: &dyn Ruleset,
        overrides: RuleMap,
        options: Options,
    ) -> Result<Self, ConfigError> {
        if registry::VERSION_ID < ruleset.required_version() {
            return Err(ConfigError::VersionMismatch {
                ruleset: ruleset.name().to_string(),
                required: ruleset.required_version(),
                current: registry::VERSION_ID,
            });
        }

        let rules = ruleset
            .rules()
            .merged(overrides)
            .merged(options.custom_rules);

        Ok(Self {
            ruleset_name: ruleset.name().to_string(),
            cache_file: options
                .cache_file
                .unwrap_or_else(|| PathBuf::from(".csfix.cache")),
            custom_fixers: options.custom_fixers,
            finder: options.finder.unwrap_or_else(FinderConfig::project_default),
            format: options.format.unwrap_or_else(|| "txt".to_string()),
            hide_progress: options.hide_progress.unwrap_or(false),
            indent: options.indent.unwrap_or_default(),
            line_ending: options.line_ending.unwrap_or_default(),
            php_executable: options.php_executable,
            risky_allowed: options
                .risky_allowed
                .unwrap_or_else(|| ruleset.auto_risky_allowed()),
            using_cache: options.using_cache.unwrap_or(true),
            rules,
        })
    }

    /// Configuration for a library, with its header docblock in place
    ///
    /// The injected `header_comment` configuration is applied after the
    /// base merge and therefore wins over every layer given to
    /// [`Factory::create`], including custom rules. Projects that need a
    /// different header must not use this entry point.
    pub fn for_library(
        self,
        library: &str,
        author: &str,
        email: &str,
        starting_year: Option<i32>,
    ) -> ResolvedConfig {
        let header = render_header(library, author, email, starting_year);

        let mut overrides = RuleMap::new();
        overrides.insert(
            "header_comment",
            RuleValue::configured([("comment_type", "PHPDoc"), ("header", header.as_str())]),
        );

        self.invoke(overrides)
    }

    /// Configuration for a project, no header injection
    pub fn for_projects(self) -> ResolvedConfig {
        self.invoke(RuleMap::new())
    }

    fn invoke(self, overrides: RuleMap) -> ResolvedConfig {
        ResolvedConfig {
            ruleset_name: self.ruleset_name,
            cache_file: self.cache_file,
            custom_fixers: self.custom_fixers,
            finder: self.finder,
            format: self.format,
            hide_progress: self.hide_progress,
            indent: self.indent,
            line_ending: self.line_ending,
            php_executable: self.php_executable,
            risky_allowed: self.risky_allowed,
            using_cache: self.using_cache,
            rules: self.rules.merged(overrides),
        }
    }
}

/// Render the library header docblock text
///
/// The year segment is omitted entirely when absent, including its
/// trailing space; the email is stripped of angle brackets and rendered as
/// ` <email>` only when non-empty.
fn render_header(library: &str, author: &str, email: &str, starting_year: Option<i32>) -> String {
    let mut year = starting_year.map(|y| y.to_string()).unwrap_or_default();
    if !year.is_empty() {
        year.push(' ');
    }

    let email = email.trim_matches(|c| c == '<' || c == '>');
    let email = if email.is_empty() {
        String::new()
    } else {
        format!(" <{email}>")
    };

    format!(
        "This file is part of {library}.\n\n(c) {year}{author}{email}\n\n\
         For the full copyright and license information, please view\n\
         the LICENSE file that was distributed with this source code."
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRuleset {
        required: u32,
        auto_risky: bool,
        rules: RuleMap,
    }

    impl Ruleset for TestRuleset {
        fn name(&self) -> &str {
            "test"
        }

        fn required_version(&self) -> u32 {
            self.required
        }

        fn auto_risky_allowed(&self) -> bool {
            self.auto_risky
        }

        fn rules(&self) -> RuleMap {
            self.rules.clone()
        }
    }

    fn ruleset(rules: RuleMap) -> TestRuleset {
        TestRuleset {
            required: 0,
            auto_risky: false,
            rules,
        }
    }

    const LICENSE_TAIL: &str = "For the full copyright and license information, please view\n\
         the LICENSE file that was distributed with this source code.";

    #[test]
    fn test_version_mismatch_is_fatal() {
        let too_new = TestRuleset {
            required: registry::VERSION_ID + 1,
            auto_risky: false,
            rules: RuleMap::new(),
        };

        let result = Factory::create(&too_new, RuleMap::new(), Options::default());
        assert!(matches!(
            result,
            Err(ConfigError::VersionMismatch { required, .. }) if required == registry::VERSION_ID + 1
        ));
    }

    #[test]
    fn test_option_defaults() {
        let config = Factory::create(&ruleset(RuleMap::new()), RuleMap::new(), Options::default())
            .unwrap()
            .for_projects();

        assert_eq!(config.ruleset_name, "test");
        assert_eq!(config.cache_file, PathBuf::from(".csfix.cache"));
        assert!(config.custom_fixers.is_empty());
        assert_eq!(config.format, "txt");
        assert!(!config.hide_progress);
        assert_eq!(config.indent, IndentStyle::Spaces(4));
        assert_eq!(config.line_ending, LineEnding::Lf);
        assert!(config.php_executable.is_none());
        assert!(!config.risky_allowed);
        assert!(config.using_cache);
        assert_eq!(config.finder.exclude, vec!["build".to_string()]);
    }

    #[test]
    fn test_risky_defaults_from_ruleset() {
        let auto = TestRuleset {
            required: 0,
            auto_risky: true,
            rules: RuleMap::new(),
        };

        let config = Factory::create(&auto, RuleMap::new(), Options::default())
            .unwrap()
            .for_projects();
        assert!(config.risky_allowed);

        let config = Factory::create(
            &auto,
            RuleMap::new(),
            Options {
                risky_allowed: Some(false),
                ..Options::default()
            },
        )
        .unwrap()
        .for_projects();
        assert!(!config.risky_allowed);
    }

    #[test]
    fn test_merge_precedence() {
        let base: RuleMap = [("a", RuleValue::enabled()), ("b", RuleValue::disabled())]
            .into_iter()
            .collect();
        let overrides: RuleMap = [("b", RuleValue::enabled())].into_iter().collect();
        let custom: RuleMap = [("a", RuleValue::disabled())].into_iter().collect();

        let config = Factory::create(
            &ruleset(base),
            overrides,
            Options {
                custom_rules: custom,
                ..Options::default()
            },
        )
        .unwrap()
        .for_projects();

        assert_eq!(config.rules.get("a"), Some(&RuleValue::disabled()));
        assert_eq!(config.rules.get("b"), Some(&RuleValue::enabled()));
        assert!(config.rules.get("c").is_none());
    }

    #[test]
    fn test_header_without_year_or_email() {
        let config = Factory::create(&ruleset(RuleMap::new()), RuleMap::new(), Options::default())
            .unwrap()
            .for_library("Lib", "Author", "", None);

        let options = config.rules.get("header_comment").unwrap().options().unwrap();
        let header = match options.get("header").unwrap() {
            crate::rules::OptionValue::Str(s) => s,
            other => panic!("unexpected header value: {other:?}"),
        };

        assert_eq!(
            header,
            &format!("This file is part of Lib.\n\n(c) Author\n\n{LICENSE_TAIL}")
        );
        assert_eq!(
            options.get("comment_type"),
            Some(&crate::rules::OptionValue::from("PHPDoc"))
        );
    }

    #[test]
    fn test_header_with_year_and_email() {
        let config = Factory::create(&ruleset(RuleMap::new()), RuleMap::new(), Options::default())
            .unwrap()
            .for_library("Lib", "Author", "a@b.com", Some(2020));

        let options = config.rules.get("header_comment").unwrap().options().unwrap();
        assert_eq!(
            options.get("header"),
            Some(&crate::rules::OptionValue::from(format!(
                "This file is part of Lib.\n\n(c) 2020 Author <a@b.com>\n\n{LICENSE_TAIL}"
            )))
        );
    }

    #[test]
    fn test_header_email_brackets_are_stripped() {
        let config = Factory::create(&ruleset(RuleMap::new()), RuleMap::new(), Options::default())
            .unwrap()
            .for_library("Lib", "Author", "<a@b.com>", None);

        let options = config.rules.get("header_comment").unwrap().options().unwrap();
        assert_eq!(
            options.get("header"),
            Some(&crate::rules::OptionValue::from(format!(
                "This file is part of Lib.\n\n(c) Author <a@b.com>\n\n{LICENSE_TAIL}"
            )))
        );
    }

    #[test]
    fn test_library_header_wins_over_custom_rules() {
        let custom: RuleMap = [("header_comment", RuleValue::disabled())]
            .into_iter()
            .collect();

        let config = Factory::create(
            &ruleset(RuleMap::new()),
            RuleMap::new(),
            Options {
                custom_rules: custom,
                ..Options::default()
            },
        )
        .unwrap()
        .for_library("Lib", "Author", "", None);

        assert!(config.rules.get("header_comment").unwrap().options().is_some());
    }

    #[test]
    fn test_for_projects_does_not_inject_header() {
        let config = Factory::create(&ruleset(RuleMap::new()), RuleMap::new(), Options::default())
            .unwrap()
            .for_projects();

        assert!(config.rules.get("header_comment").is_none());
    }
}
