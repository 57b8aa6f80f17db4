//! Selecting, renaming, and copying files into the flat output directory.

pub mod rename;
mod walk;

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::DumpError;
use rename::RenameCounter;

/// File name suffixes that get copied. Matching is case-sensitive.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".py", ".html", ".css", ".js"];

/// How final names are chosen when several source files share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NamePolicy {
    /// Number repeated names and keep bumping until the name is unused
    #[default]
    Unique,
    /// Number repeated names by original-name count only; a generated
    /// `a_2.py` may overwrite a real `a_2.py`
    Compat,
}

impl NamePolicy {
    fn as_str(&self) -> &str {
        match self {
            Self::Unique => "unique",
            Self::Compat => "compat",
        }
    }
}

impl fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Suffix allow-list backed by a glob set (`*.py`, `*.html`, ...).
#[derive(Debug, Clone)]
pub struct ExtensionAllowList {
    globs: GlobSet,
}

impl ExtensionAllowList {
    /// Build the glob set for [`ALLOWED_EXTENSIONS`]. A pattern that does not
    /// compile is an error, never an empty list.
    pub fn new() -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for ext in ALLOWED_EXTENSIONS {
            builder.add(Glob::new(&format!("*{ext}"))?);
        }
        let globs = builder.build()?;
        Ok(Self { globs })
    }

    /// Whether a bare file name ends with one of the allowed suffixes.
    pub fn matches(&self, file_name: &str) -> bool {
        self.globs.is_match(file_name)
    }
}

/// Original absolute path -> final file name inside the output directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalNames {
    entries: BTreeMap<PathBuf, String>,
}

impl FinalNames {
    pub(crate) fn insert(&mut self, original: PathBuf, final_name: String) {
        self.entries.insert(original, final_name);
    }

    pub fn get(&self, original: &Path) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PathBuf, String> {
        self.entries.iter()
    }

    /// Number of files whose final name differs from their original name.
    pub fn renamed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(path, final_name)| {
                path.file_name()
                    .map(|n| n.to_string_lossy() != final_name.as_str())
                    .unwrap_or(true)
            })
            .count()
    }
}

impl<'a> IntoIterator for &'a FinalNames {
    type Item = (&'a PathBuf, &'a String);
    type IntoIter = btree_map::Iter<'a, PathBuf, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walk `source`, copy every allow-listed file into `destination` under its
/// final name, and return the name mapping.
///
/// `destination` must already exist. Copy failures abort the run; the
/// destination is left with whatever was copied so far.
pub fn collect_and_copy(
    source: &Path,
    destination: &Path,
    policy: NamePolicy,
) -> Result<FinalNames, DumpError> {
    if !source.is_dir() {
        return Err(DumpError::NotADirectory(source.to_path_buf()));
    }

    let allow_list = ExtensionAllowList::new()?;
    let mut counter = RenameCounter::new(policy);
    let mut names = FinalNames::default();

    walk::visit_selected(source, &allow_list, |path, file_name| {
        let final_name = counter.final_name(file_name);
        let target = destination.join(&final_name);
        fs::copy(path, &target).map_err(|source| DumpError::Copy {
            source_path: path.to_path_buf(),
            destination_path: target.clone(),
            source,
        })?;
        debug!(from = %path.display(), to = %final_name, "copied");
        names.insert(path.to_path_buf(), final_name);
        Ok(())
    })?;

    info!(
        copied = names.len(),
        renamed = names.renamed_count(),
        "collection finished"
    );
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_covers_every_allowed_extension() {
        let allow = ExtensionAllowList::new().unwrap();
        for ext in ALLOWED_EXTENSIONS {
            assert!(allow.matches(&format!("file{ext}")), "{ext} not matched");
        }
    }

    #[test]
    fn name_policy_displays_its_cli_value() {
        use clap::ValueEnum;
        for policy in NamePolicy::value_variants() {
            let value = policy.to_possible_value().unwrap();
            assert_eq!(policy.to_string(), value.get_name());
        }
    }

    #[test]
    fn allow_list_matches_suffixes_case_sensitively() {
        let allow = ExtensionAllowList::new().unwrap();
        assert!(allow.matches("main.py"));
        assert!(allow.matches("index.html"));
        assert!(allow.matches("site.css"));
        assert!(allow.matches("app.min.js"));
        assert!(!allow.matches("MAIN.PY"));
        assert!(!allow.matches("notes.txt"));
        assert!(!allow.matches("script.jsx"));
        assert!(!allow.matches("py"));
    }

    #[test]
    fn allow_list_matches_bare_suffix_names() {
        let allow = ExtensionAllowList::new().unwrap();
        assert!(allow.matches(".py"));
        assert!(allow.matches(".js"));
    }

    #[test]
    fn renamed_count_ignores_unchanged_names() {
        let mut names = FinalNames::default();
        names.insert(PathBuf::from("/src/a/x.py"), "x.py".to_string());
        names.insert(PathBuf::from("/src/b/x.py"), "x_2.py".to_string());
        names.insert(PathBuf::from("/src/y.js"), "y.js".to_string());
        assert_eq!(names.len(), 3);
        assert_eq!(names.renamed_count(), 1);
        assert_eq!(names.get(Path::new("/src/b/x.py")), Some("x_2.py"));
        assert_eq!(names.get(Path::new("/src/c.py")), None);
    }
}
