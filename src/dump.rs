//! One dump run: validate roots, copy, render `tree.txt`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::collect::{self, FinalNames, NamePolicy};
use crate::error::DumpError;
use crate::tree::{self, TREE_FILE_NAME};

/// A validated source/destination pair, ready to run.
#[derive(Debug, Clone)]
pub struct Dumper {
    source: PathBuf,
    destination: PathBuf,
    policy: NamePolicy,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct DumpReport {
    /// Flat output directory.
    pub destination: PathBuf,
    /// Path of the written tree document.
    pub tree_file: PathBuf,
    /// Number of files copied.
    pub copied: usize,
    /// Number of files copied under a different name.
    pub renamed: usize,
    /// Original path -> final name for every copied file.
    pub names: FinalNames,
}

impl Dumper {
    /// Resolve `source` and place the output at `<output_parent>/<source name>`.
    ///
    /// Fails if `source` is not an existing directory or if the output
    /// directory would be the source itself or sit inside it.
    pub fn new(
        source: impl AsRef<Path>,
        output_parent: impl AsRef<Path>,
    ) -> Result<Self, DumpError> {
        let raw = source.as_ref();
        let source = raw.canonicalize().map_err(|e| match e.kind() {
            ErrorKind::NotFound => DumpError::NotADirectory(raw.to_path_buf()),
            _ => DumpError::Io {
                path: raw.to_path_buf(),
                source: e,
            },
        })?;
        if !source.is_dir() {
            return Err(DumpError::NotADirectory(source));
        }

        let name = source
            .file_name()
            .ok_or_else(|| DumpError::UnnamedSource(source.clone()))?
            .to_os_string();

        let parent_raw = output_parent.as_ref();
        let parent = parent_raw.canonicalize().map_err(|e| DumpError::Io {
            path: parent_raw.to_path_buf(),
            source: e,
        })?;
        let destination = parent.join(name);
        ensure_disjoint(&source, &destination)?;

        Ok(Self {
            source,
            destination,
            policy: NamePolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: NamePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn policy(&self) -> NamePolicy {
        self.policy
    }

    /// Create the output directory, copy the selected files into it, and
    /// write the tree document.
    pub fn run(&self) -> Result<DumpReport, DumpError> {
        fs::create_dir_all(&self.destination).map_err(|e| DumpError::CreateDestination {
            path: self.destination.clone(),
            source: e,
        })?;
        // The directory may have been swapped for a link since `new`.
        ensure_disjoint(&self.source, &self.destination)?;
        info!(
            source = %self.source.display(),
            destination = %self.destination.display(),
            policy = ?self.policy,
            "dump started"
        );

        let names = collect::collect_and_copy(&self.source, &self.destination, self.policy)?;

        let document = tree::render_tree(&self.source, &names);
        let tree_file = self.destination.join(TREE_FILE_NAME);
        fs::write(&tree_file, document).map_err(|e| DumpError::WriteTree {
            path: tree_file.clone(),
            source: e,
        })?;
        info!(path = %tree_file.display(), "tree written");

        Ok(DumpReport {
            destination: self.destination.clone(),
            tree_file,
            copied: names.len(),
            renamed: names.renamed_count(),
            names,
        })
    }
}

/// Reject a destination that is, or resolves into, the source tree.
fn ensure_disjoint(source: &Path, destination: &Path) -> Result<(), DumpError> {
    let resolved = match fs::canonicalize(destination) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == ErrorKind::NotFound => destination.to_path_buf(),
        Err(e) => {
            return Err(DumpError::Io {
                path: destination.to_path_buf(),
                source: e,
            })
        }
    };

    if destination.starts_with(source) || resolved.starts_with(source) {
        return Err(DumpError::Overlap {
            source_root: source.to_path_buf(),
            destination: resolved,
        });
    }
    Ok(())
}
