// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for parser tests.

use jilscope_core::{Job, ParseOutcome};

/// Look up a job by name, panicking if it is absent.
pub fn job<'a>(outcome: &'a ParseOutcome, name: &str) -> &'a Job {
    outcome
        .registry
        .get(name)
        .unwrap_or_else(|| panic!("job {name} not in registry"))
}

/// Position of a name in the execution order.
pub fn position(outcome: &ParseOutcome, name: &str) -> usize {
    outcome
        .execution_order
        .iter()
        .position(|n| n == name)
        .unwrap_or_else(|| panic!("job {name} not in execution order"))
}
