// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attribute extraction
//!
//! Second parsing stage: splits a block line into `key: value` pairs
//! and assigns each pair onto the job. A handful of structural keys map
//! to first-class fields; everything else lands in the attribute map.

use crate::condition::extract_dependencies;
use jilscope_core::{Job, JobType};
use regex::Regex;
use std::sync::LazyLock;

// A new pair begins wherever whitespace runs into `word:`. Values are
// not quote-aware, so a value containing ` word:` is cut short there.
#[allow(clippy::expect_used)]
static PAIR_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\w+:").expect("constant regex pattern is valid"));

/// Split one block line into pairs and assign each onto the job.
pub(crate) fn apply_line(job: &mut Job, line: &str) {
    for piece in split_pairs(line) {
        let Some((key, value)) = split_pair(piece) else {
            continue;
        };
        assign(job, key, value);
    }
}

fn split_pairs(line: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for found in PAIR_BOUNDARY.find_iter(line) {
        if found.start() > start {
            pieces.push(&line[start..found.start()]);
            start = found.start();
        }
    }
    pieces.push(&line[start..]);
    pieces
}

/// Split a piece at its first colon. The value loses one level of
/// surrounding double quotes; escape sequences are not interpreted.
fn split_pair(piece: &str) -> Option<(&str, &str)> {
    let (key, value) = piece.split_once(':')?;
    Some((key.trim(), unquote(value.trim())))
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Assign one pair. Keys dispatch case-insensitively; unrecognized keys
/// keep their original casing in the attribute map and are only stored
/// when both key and value are non-empty.
fn assign(job: &mut Job, key: &str, value: &str) {
    match key.to_lowercase().as_str() {
        "job_type" => job.job_type = JobType::from_code(value),
        "box_name" => job.parent = Some(value.to_string()),
        "description" => {
            job.description = Some(value.to_string());
            job.attributes
                .insert("description".to_string(), value.to_string());
        }
        "condition" => {
            job.attributes
                .insert("condition".to_string(), value.to_string());
            for dep in extract_dependencies(value) {
                job.add_dependency(&dep);
            }
        }
        _ => {
            if !key.is_empty() && !value.is_empty() {
                job.attributes.insert(key.to_string(), value.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
