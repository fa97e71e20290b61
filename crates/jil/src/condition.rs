// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Condition reference extraction
//!
//! Pulls job names out of `condition:` values. Only the five reference
//! forms are recognized, lowercase; the boolean structure around them
//! (`&`, `|`, grouping) is never interpreted.

use regex::Regex;
use std::sync::LazyLock;

// Scanned in this order, so extraction order follows pattern order
// rather than document order
#[allow(clippy::expect_used)]
static REFERENCE_PATTERNS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        Regex::new(r"success\(([^)]+)\)").expect("constant regex pattern is valid"),
        Regex::new(r"failure\(([^)]+)\)").expect("constant regex pattern is valid"),
        Regex::new(r"done\(([^)]+)\)").expect("constant regex pattern is valid"),
        Regex::new(r"notrun\(([^)]+)\)").expect("constant regex pattern is valid"),
        Regex::new(r"terminated\(([^)]+)\)").expect("constant regex pattern is valid"),
    ]
});

/// Collect the job names referenced by a condition value. Each name
/// keeps the position of its first appearance; duplicates are dropped.
pub(crate) fn extract_dependencies(condition: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for pattern in REFERENCE_PATTERNS.iter() {
        for captures in pattern.captures_iter(condition) {
            let name = captures[1].trim().to_string();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
