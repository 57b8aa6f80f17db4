//! Rendering the filtered, renamed view of the source hierarchy.

mod layout;

use std::path::Path;
use tracing::warn;

use crate::collect::FinalNames;
use layout::DirNode;

/// Name of the tree document written next to the copied files.
pub const TREE_FILE_NAME: &str = "tree.txt";

/// Document written when no file matched the allow-list.
pub const EMPTY_TREE_PLACEHOLDER: &str = "(No files with specified extensions found)";

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// Render the subtree of `root` that contains the files in `names`, showing
/// each file under its final name.
///
/// The first line is `<root name>/`; children follow in byte order of their
/// original names, indented by [`INDENT_WIDTH`] spaces per level.
pub fn render_tree(root: &Path, names: &FinalNames) -> String {
    if names.is_empty() {
        return EMPTY_TREE_PLACEHOLDER.to_string();
    }

    let mut top = DirNode::default();
    for (original, final_name) in names {
        match original.strip_prefix(root) {
            Ok(relative) => top.insert(relative, final_name),
            Err(_) => warn!(path = %original.display(), "path outside tree root, not rendered"),
        }
    }

    let mut lines = vec![format!("{}/", root_label(root))];
    top.push_lines(0, &mut lines);
    lines.join("\n")
}

fn root_label(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}
