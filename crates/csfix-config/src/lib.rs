//! csfix-config: configuration factory and ruleset test harness for the
//! csfix style-fixing engine
//!
//! This crate does not rewrite any source itself. It assembles the
//! configuration the engine consumes:
//!
//! - A [`Ruleset`] contributes named, versioned rule defaults
//! - [`Factory`] merges ruleset defaults, project overrides and custom
//!   rules into one [`ResolvedConfig`], last write wins
//! - [`FixerDiscovery`] turns a directory of conventionally named files
//!   into custom-fixer instances through an explicit registration table
//! - The [`conformance`] suite verifies rulesets stay consistent with the
//!   engine's built-in fixer catalog
//!
//! # Example
//!
//! ```ignore
//! use csfix_config::{Factory, Options, RuleMap};
//! use csfix_rulesets::Standard;
//!
//! let overrides = RuleMap::load(".csfix-overrides.toml")?;
//! let config = Factory::create(&Standard, overrides, Options::default())?
//!     .for_library("My Library", "Jane Doe", "jane@example.com", Some(2024));
//! ```

pub mod conformance;
mod discovery;
mod error;
mod factory;
mod finder;
mod fixer;
pub mod presets;
mod provider;
pub mod registry;
mod rules;
mod ruleset;
mod whitespace;

pub use discovery::{is_fixer_candidate, Discovered, FixerCtor, FixerDiscovery, FixerTable};
pub use error::{ConfigError, DiscoveryError};
pub use factory::{Factory, Options, ResolvedConfig};
pub use finder::{project_root, project_root_from, FinderConfig};
pub use fixer::{CustomFixer, Edit};
pub use provider::{FixerProvider, ProviderCache};
pub use registry::{FixerInfo, FixerRegistry, OptionInfo, VERSION_ID};
pub use rules::{OptionValue, RuleMap, RuleValue};
pub use ruleset::Ruleset;
pub use whitespace::{IndentStyle, LineEnding};
