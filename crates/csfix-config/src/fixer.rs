//! Custom-fixer capability contract
//!
//! Custom fixers extend the engine's built-in catalog. The engine drives
//! them through this trait; this crate only needs it to type the
//! `custom_fixers` list and to filter discovered plugins.

/// A span-based replacement suggested by a fixer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte offset where the replacement starts
    pub start: usize,
    /// Byte offset where the replacement ends (exclusive)
    pub end: usize,
    pub replacement: String,
    pub message: String,
}

/// The behavior contract every custom fixer must satisfy
pub trait CustomFixer: Send + Sync {
    /// Declared name, used as the rule key in configurations
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Whether applying this fixer can change runtime behavior
    fn is_risky(&self) -> bool {
        false
    }

    /// Check the source and return the edits to apply
    fn check(&self, source: &str) -> Vec<Edit>;
}
