//! csfix-rulesets: official rulesets for the csfix configuration factory
//!
//! Available rulesets:
//! - [`Standard`]: the house style, risky fixers off
//! - [`Strict`]: the house style plus risky fixers, risky mode auto-on
//!
//! Every ruleset here must pass the conformance suite in
//! `csfix_config::conformance`; see `tests/conformance.rs`.

mod standard;
mod strict;

pub use standard::Standard;
pub use strict::Strict;
