use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;

use super::INDENT_WIDTH;

/// A directory in the filtered hierarchy, children keyed by original name.
#[derive(Debug, Default)]
pub(super) struct DirNode {
    children: BTreeMap<OsString, Node>,
}

#[derive(Debug)]
enum Node {
    Dir(DirNode),
    /// Final (possibly renamed) file name.
    File(String),
}

impl DirNode {
    /// Add a file at `relative` (relative to this node), creating the
    /// intermediate directories.
    pub(super) fn insert(&mut self, relative: &Path, final_name: &str) {
        let components: Vec<_> = relative.iter().collect();
        let Some((file, dirs)) = components.split_last() else {
            return;
        };

        let mut node = self;
        for dir in dirs {
            let child = node
                .children
                .entry(dir.to_os_string())
                .or_insert_with(|| Node::Dir(DirNode::default()));
            node = match child {
                Node::Dir(d) => d,
                // a file and a directory cannot share a path
                Node::File(_) => return,
            };
        }
        node.children
            .insert(file.to_os_string(), Node::File(final_name.to_string()));
    }

    /// Append one line per child, recursing into directories.
    pub(super) fn push_lines(&self, level: usize, lines: &mut Vec<String>) {
        let indent = " ".repeat(INDENT_WIDTH * (level + 1));
        for (name, child) in &self.children {
            match child {
                Node::Dir(dir) => {
                    lines.push(format!("{indent}{}/", name.to_string_lossy()));
                    dir.push_lines(level + 1, lines);
                }
                Node::File(final_name) => lines.push(format!("{indent}{final_name}")),
            }
        }
    }
}
