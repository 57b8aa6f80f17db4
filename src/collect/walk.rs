use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::ExtensionAllowList;
use crate::error::DumpError;

/// Walk `root` and call `visit` with every selected file and its name.
///
/// Order: a directory's files by name, then its subdirectories by name,
/// depth first. Unreadable entries are skipped with a warning; an error
/// returned by `visit` stops the walk.
pub(super) fn visit_selected<F>(
    root: &Path,
    allow_list: &ExtensionAllowList,
    mut visit: F,
) -> Result<(), DumpError>
where
    F: FnMut(&Path, &str) -> Result<(), DumpError>,
{
    let walker = WalkDir::new(root).follow_links(false).sort_by(sort_cmp);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "???".to_string());
                warn!("skipping unreadable entry {}: {}", path, e);
                continue;
            }
        };

        // Skip root itself
        if entry.depth() == 0 {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !allow_list.matches(&file_name) || !is_regular_file(&entry) {
            continue;
        }

        visit(entry.path(), &file_name)?;
    }

    Ok(())
}

/// Regular files, or symlinks that resolve to one.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if file_type.is_symlink() {
        let resolved = fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !resolved {
            debug!(path = %entry.path().display(), "skipping symlink without a file target");
        }
        return resolved;
    }
    false
}

/// Comparison function for walkdir sorting.
/// Files before directories, then byte-wise by name.
fn sort_cmp(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_is_dir = a.file_type().is_dir();
    let b_is_dir = b.file_type().is_dir();

    if a_is_dir != b_is_dir {
        return if a_is_dir {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    a.file_name().cmp(b.file_name())
}
