#![allow(dead_code)]

use aidump::collect::NamePolicy;
use aidump::dump::{DumpReport, Dumper};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; files get their own path as content,
/// so every copy can be traced back to its source.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    fs::create_dir_all(&root).unwrap();
    for p in paths {
        let full = root.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, p.as_bytes()).unwrap();
        }
    }
    tmp
}

/// Source root inside a fixture.
pub fn source_root(fixture: &TempDir) -> std::path::PathBuf {
    fixture.path().join("root")
}

/// Run a dump of the fixture's `root/` into a fresh output parent.
pub fn dump_fixture(fixture: &TempDir, policy: NamePolicy) -> (TempDir, DumpReport) {
    let out = TempDir::new().unwrap();
    let report = Dumper::new(source_root(fixture), out.path())
        .unwrap()
        .with_policy(policy)
        .run()
        .unwrap();
    (out, report)
}

/// Sorted file names inside a directory.
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

pub fn read_tree(report: &DumpReport) -> String {
    fs::read_to_string(&report.tree_file).unwrap()
}
