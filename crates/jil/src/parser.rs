// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing entry point
//!
//! Wires the stages together: scan the text into blocks, extract each
//! block's attributes, rebuild reverse dependency edges, sequence, and
//! build the box hierarchy.

use crate::attributes;
use crate::scanner;
use jilscope_core::{build_hierarchy, execution_order, Job, JobRegistry, ParseOutcome};

/// Parse JIL text into a registry, root box list, and execution order.
///
/// Never fails: unrecognized text degrades to jobs with `UNKNOWN` type
/// and whatever attributes could be extracted. Duplicate job names keep
/// the last definition wholesale. Each call starts from scratch; no
/// state survives between calls.
pub fn parse_source(source: &str) -> ParseOutcome {
    let mut registry = JobRegistry::new();
    for block in scanner::scan(source) {
        let mut job = Job::new(block.name, block.index);
        for line in &block.lines {
            attributes::apply_line(&mut job, line);
        }
        registry.insert(job);
    }
    registry.link_dependents();

    let order = execution_order(&registry);
    let root_boxes = build_hierarchy(&mut registry, &order);

    ParseOutcome {
        registry,
        root_boxes,
        execution_order: order,
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
