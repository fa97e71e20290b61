// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line classification
//!
//! First parsing stage: walks the raw text line by line, strips the
//! three comment forms, and groups what remains into one block per
//! `insert_job:` statement. Attribute interpretation happens later;
//! this stage only decides which lines belong to which job.

use regex::Regex;
use std::sync::LazyLock;

// Attribute keywords that may share a line with `insert_job:`. The job
// name runs up to the first of these; an unrecognized word stays part
// of the name.
#[allow(clippy::expect_used)]
static SAME_LINE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(job_type|box_name|command|machine|owner|description|alarm_if_fail|alarm_if_terminated|group|application|condition):",
    )
    .expect("constant regex pattern is valid")
});

/// One `insert_job:` block, before attribute interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawJob {
    /// Job name from the `insert_job:` line
    pub name: String,
    /// Candidate attribute lines, comment-stripped and trimmed
    pub lines: Vec<String>,
    /// Position of this block in the file, counting from zero
    pub index: usize,
}

/// Split JIL text into job blocks.
///
/// Comment handling is line-granular: a block comment swallows every
/// line through the one containing `*/`, a leading `//` drops the whole
/// line, and an inline `//` truncates the line at its first occurrence.
/// Quoted values are not protected from inline truncation. A blank line
/// or a new `insert_job:` finalizes the open block; end of input
/// finalizes the last one.
pub(crate) fn scan(source: &str) -> Vec<RawJob> {
    let mut blocks: Vec<RawJob> = Vec::new();
    let mut current: Option<RawJob> = None;
    let mut in_block_comment = false;
    let mut next_index = 0;

    for raw_line in source.lines() {
        if in_block_comment {
            // Blank lines in here do not finalize the open block
            if raw_line.contains("*/") {
                in_block_comment = false;
            }
            continue;
        }

        let line = raw_line.trim();

        if line.starts_with("/*") {
            if !line.contains("*/") {
                in_block_comment = true;
            }
            continue;
        }

        if line.is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }

        if line.starts_with("//") {
            continue;
        }

        let line = match line.find("//") {
            Some(at) => line[..at].trim_end(),
            None => line,
        };

        if let Some(rest) = line.strip_prefix("insert_job:") {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            let (name, shared) = split_name(rest);
            let mut block = RawJob {
                name,
                lines: Vec::new(),
                index: next_index,
            };
            next_index += 1;
            if let Some(shared) = shared {
                block.lines.push(shared);
            }
            current = Some(block);
            continue;
        }

        if let Some(block) = current.as_mut() {
            if line.contains(':') {
                block.lines.push(line.to_string());
            }
        }
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    blocks
}

/// Split the remainder of an `insert_job:` line into the job name and
/// the attribute text sharing the line, if any.
fn split_name(rest: &str) -> (String, Option<String>) {
    match SAME_LINE_ATTRIBUTE.find(rest) {
        Some(found) => (
            rest[..found.start()].trim().to_string(),
            Some(rest[found.start()..].to_string()),
        ),
        None => (rest.trim().to_string(), None),
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
