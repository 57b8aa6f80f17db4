//! Collision-safe final names for the flat output directory.

use std::collections::{HashMap, HashSet};

use super::NamePolicy;

/// Per-run counter of how often each original file name has been seen.
#[derive(Debug, Default)]
pub struct RenameCounter {
    policy: NamePolicy,
    seen: HashMap<String, usize>,
    assigned: HashSet<String>,
}

impl RenameCounter {
    pub fn new(policy: NamePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Register one more occurrence of `file_name` and return the name it is
    /// copied under: unchanged the first time, `base_N.ext` for the Nth.
    pub fn final_name(&mut self, file_name: &str) -> String {
        let count = self.seen.entry(file_name.to_string()).or_insert(0);
        *count += 1;

        let mut n = *count;
        let mut candidate = numbered_name(file_name, n);
        if self.policy == NamePolicy::Unique {
            while self.assigned.contains(&candidate) {
                n = n.max(1) + 1;
                candidate = numbered_name(file_name, n);
            }
        }

        self.assigned.insert(candidate.clone());
        candidate
    }
}

fn numbered_name(file_name: &str, n: usize) -> String {
    if n <= 1 {
        return file_name.to_string();
    }
    let (base, ext) = split_extension(file_name);
    format!("{base}_{n}{ext}")
}

/// Split a file name into base and final extension (dot included).
///
/// Leading dots belong to the base, so `.py` has no extension.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(i) => file_name.split_at(leading + i),
        None => (file_name, ""),
    }
}
