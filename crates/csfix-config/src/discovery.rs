//! Custom-fixer discovery
//!
//! Library authors ship add-on fixers by dropping files following the
//! engine's naming convention (`SomethingFixer.php`, never `Abstract*`)
//! into a directory. Discovery walks that directory, synthesizes the
//! fully-qualified type name under a vendor namespace, and constructs each
//! fixer through an explicit registration table. Objects that construct
//! but do not provide the fixer capability are dropped silently; a name
//! with no registered constructor is an error, since it indicates a broken
//! plugin file rather than a filtering decision.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::{IntoIter, WalkDir};

use crate::error::DiscoveryError;
use crate::fixer::CustomFixer;

const VENDOR_PATTERN: &str = r"^[A-Z][a-zA-Z0-9\\]+$";

/// Constructor for a discovered type
///
/// Returns `None` when the constructed object does not provide the
/// [`CustomFixer`] capability.
pub type FixerCtor = fn() -> Option<Box<dyn CustomFixer>>;

/// Registration table mapping fully-qualified type names to constructors
#[derive(Default)]
pub struct FixerTable {
    ctors: HashMap<String, FixerCtor>,
}

impl FixerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, ctor: FixerCtor) {
        self.ctors.insert(name.into(), ctor);
    }

    pub fn get(&self, name: &str) -> Option<FixerCtor> {
        self.ctors.get(name).copied()
    }
}

/// Whether a file name follows the concrete-fixer naming convention
///
/// Two independent checks: the `Abstract` prefix excludes partial base
/// classes, the `Fixer` suffix marks concrete implementations.
pub fn is_fixer_candidate(file_name: &str) -> bool {
    let Some(stem) = file_name.strip_suffix(".php") else {
        return false;
    };

    !stem.starts_with("Abstract") && stem.ends_with("Fixer")
}

/// Lazily discovers custom fixers under a directory
pub struct FixerDiscovery {
    path: PathBuf,
    vendor: String,
}

impl FixerDiscovery {
    /// Validate the discovery path and vendor namespace
    ///
    /// No scanning happens here; each call to [`FixerDiscovery::fixers`]
    /// re-walks the directory.
    pub fn create(
        path: impl Into<PathBuf>,
        vendor: impl Into<String>,
    ) -> Result<Self, DiscoveryError> {
        let path = path.into();
        let vendor = vendor.into();

        if path.as_os_str().is_empty() {
            return Err(DiscoveryError::EmptyPath);
        }
        if !path.is_dir() {
            return Err(DiscoveryError::NotADirectory(path));
        }
        if vendor.is_empty() {
            return Err(DiscoveryError::EmptyVendor);
        }
        if !Regex::new(VENDOR_PATTERN)?.is_match(&vendor) {
            return Err(DiscoveryError::InvalidVendor(vendor));
        }

        Ok(Self { path, vendor })
    }

    /// Walk the directory and construct every registered fixer
    ///
    /// Files are visited in name-sorted order. Re-iterating re-scans the
    /// filesystem and re-constructs; nothing is cached.
    pub fn fixers<'a>(&'a self, table: &'a FixerTable) -> Discovered<'a> {
        Discovered {
            walker: WalkDir::new(&self.path).sort_by_file_name().into_iter(),
            root: &self.path,
            vendor: &self.vendor,
            table,
        }
    }

    /// Synthesize the fully-qualified type name for a candidate file
    fn qualified_name(vendor: &str, root: &Path, file: &Path) -> Option<String> {
        let relative = file.strip_prefix(root).ok()?;
        let stem = relative.file_stem()?.to_string_lossy();

        let mut name = vendor.trim_matches('\\').to_string();
        if let Some(parent) = relative.parent() {
            for component in parent.components() {
                name.push('\\');
                name.push_str(&component.as_os_str().to_string_lossy());
            }
        }
        name.push('\\');
        name.push_str(&stem);

        Some(name)
    }
}

/// Iterator over discovered fixers, yielding construction errors
pub struct Discovered<'a> {
    walker: IntoIter,
    root: &'a Path,
    vendor: &'a str,
    table: &'a FixerTable,
}

impl Iterator for Discovered<'_> {
    type Item = Result<Box<dyn CustomFixer>, DiscoveryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if !is_fixer_candidate(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let Some(name) =
                FixerDiscovery::qualified_name(self.vendor, self.root, entry.path())
            else {
                continue;
            };

            match self.table.get(&name) {
                Some(ctor) => match ctor() {
                    // Constructed but lacks the fixer capability
                    None => continue,
                    Some(fixer) => return Some(Ok(fixer)),
                },
                None => {
                    return Some(Err(DiscoveryError::Unregistered {
                        name,
                        path: entry.into_path(),
                    }));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixer::Edit;
    use std::fs;
    use tempfile::TempDir;

    struct NoopFixer(&'static str);

    impl CustomFixer for NoopFixer {
        fn name(&self) -> &str {
            self.0
        }

        fn check(&self, _source: &str) -> Vec<Edit> {
            Vec::new()
        }
    }

    fn foo_ctor() -> Option<Box<dyn CustomFixer>> {
        Some(Box::new(NoopFixer("foo")))
    }

    fn bar_ctor() -> Option<Box<dyn CustomFixer>> {
        Some(Box::new(NoopFixer("bar")))
    }

    fn non_fixer_ctor() -> Option<Box<dyn CustomFixer>> {
        None
    }

    #[test]
    fn test_create_rejects_empty_path() {
        assert!(matches!(
            FixerDiscovery::create("", "Acme"),
            Err(DiscoveryError::EmptyPath)
        ));
    }

    #[test]
    fn test_create_rejects_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        assert!(matches!(
            FixerDiscovery::create(missing, "Acme"),
            Err(DiscoveryError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_create_rejects_bad_vendor() {
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            FixerDiscovery::create(temp.path(), ""),
            Err(DiscoveryError::EmptyVendor)
        ));
        assert!(matches!(
            FixerDiscovery::create(temp.path(), "acme"),
            Err(DiscoveryError::InvalidVendor(_))
        ));
        assert!(matches!(
            FixerDiscovery::create(temp.path(), "Acme\\Fixer!"),
            Err(DiscoveryError::InvalidVendor(_))
        ));
        assert!(FixerDiscovery::create(temp.path(), "Acme\\Fixer").is_ok());
    }

    #[test]
    fn test_candidate_predicate() {
        assert!(is_fixer_candidate("FooFixer.php"));
        assert!(!is_fixer_candidate("AbstractFooFixer.php"));
        assert!(!is_fixer_candidate("Helper.php"));
        assert!(!is_fixer_candidate("FooFixer.rs"));
    }

    #[test]
    fn test_discovery_filters_by_naming_convention() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("AbstractFoo.php"), "").unwrap();
        fs::write(temp.path().join("FooFixer.php"), "").unwrap();
        fs::write(temp.path().join("Helper.php"), "").unwrap();

        let mut table = FixerTable::new();
        table.register("Acme\\FooFixer", foo_ctor);

        let discovery = FixerDiscovery::create(temp.path(), "Acme").unwrap();
        let fixers: Vec<_> = discovery
            .fixers(&table)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(fixers.len(), 1);
        assert_eq!(fixers[0].name(), "foo");
    }

    #[test]
    fn test_discovery_synthesizes_nested_namespaces() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Comment")).unwrap();
        fs::write(temp.path().join("Comment").join("BarFixer.php"), "").unwrap();

        let mut table = FixerTable::new();
        table.register("Acme\\CsFixer\\Comment\\BarFixer", bar_ctor);

        let discovery = FixerDiscovery::create(temp.path(), "Acme\\CsFixer").unwrap();
        let fixers: Vec<_> = discovery
            .fixers(&table)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(fixers.len(), 1);
        assert_eq!(fixers[0].name(), "bar");
    }

    #[test]
    fn test_unregistered_fixer_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("MissingFixer.php"), "").unwrap();

        let discovery = FixerDiscovery::create(temp.path(), "Acme").unwrap();
        let result: Result<Vec<_>, _> = discovery.fixers(&FixerTable::new()).collect();

        match result {
            Err(DiscoveryError::Unregistered { name, .. }) => {
                assert_eq!(name, "Acme\\MissingFixer");
            }
            other => panic!("expected Unregistered error, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_non_capability_instances_are_dropped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("FooFixer.php"), "").unwrap();
        fs::write(temp.path().join("PlainFixer.php"), "").unwrap();

        let mut table = FixerTable::new();
        table.register("Acme\\FooFixer", foo_ctor);
        table.register("Acme\\PlainFixer", non_fixer_ctor);

        let discovery = FixerDiscovery::create(temp.path(), "Acme").unwrap();
        let fixers: Vec<_> = discovery
            .fixers(&table)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(fixers.len(), 1);
        assert_eq!(fixers[0].name(), "foo");
    }

    #[test]
    fn test_iteration_is_restartable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("FooFixer.php"), "").unwrap();

        let mut table = FixerTable::new();
        table.register("Acme\\FooFixer", foo_ctor);

        let discovery = FixerDiscovery::create(temp.path(), "Acme").unwrap();
        assert_eq!(discovery.fixers(&table).count(), 1);

        // A file added between traversals shows up on the next scan
        fs::write(temp.path().join("BarFixer.php"), "").unwrap();
        table.register("Acme\\BarFixer", bar_ctor);
        assert_eq!(discovery.fixers(&table).count(), 2);
    }
}
