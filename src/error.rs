//! Error types surfaced by the library.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a dump run.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The source path could not be resolved.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source path exists but is not a directory.
    #[error("{}: Not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The source path has no final component to name the output after (e.g. `/`).
    #[error("{}: cannot derive an output directory name", .0.display())]
    UnnamedSource(PathBuf),

    /// The output directory would be the source itself or live inside it.
    #[error(
        "output directory {} overlaps source {}; run from outside the source tree",
        destination.display(),
        source_root.display()
    )]
    Overlap {
        source_root: PathBuf,
        destination: PathBuf,
    },

    /// The extension allow-list patterns did not compile.
    #[error("invalid extension pattern")]
    AllowList(#[from] globset::Error),

    #[error("failed to create output directory {}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {} to {}", source_path.display(), destination_path.display())]
    Copy {
        source_path: PathBuf,
        destination_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteTree {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
