//! Error types for configuration building and custom-fixer discovery

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The ruleset requires a newer engine than the one linked in
    #[error(
        "the \"{ruleset}\" ruleset requires a minimum engine VERSION_ID of \"{required}\" but the current VERSION_ID is \"{current}\""
    )]
    VersionMismatch {
        ruleset: String,
        required: u32,
        current: u32,
    },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rule map: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors raised while discovering custom fixers on disk
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("path to custom fixers cannot be empty")]
    EmptyPath,

    #[error("path {0:?} is not a valid directory")]
    NotADirectory(PathBuf),

    #[error("vendor namespace cannot be empty")]
    EmptyVendor,

    #[error("vendor namespace \"{0}\" is not valid")]
    InvalidVendor(String),

    /// A file matched the fixer naming convention but its type has no
    /// registered constructor, so the fixer cannot be built.
    #[error("custom fixer \"{name}\" (from {path:?}) has no registered constructor")]
    Unregistered { name: String, path: PathBuf },

    #[error(transparent)]
    Regex(#[from] regex::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}
