// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jilscope-core: job model and graph algorithms for JIL job definitions
//!
//! This crate provides:
//! - The `Job` record and insertion-ordered `JobRegistry`
//! - Reverse dependency linking (`required_by` edges)
//! - A cycle-tolerant topological sequencer
//! - Box hierarchy construction (parent/child tree, depth, display order)
//! - Registry comparison for two-file diffs

pub mod diff;
pub mod job;
pub mod order;
pub mod registry;
pub mod tree;

pub use diff::{diff_registries, DiffReport, FieldChange, JobChange};
pub use job::{Job, JobType};
pub use order::execution_order;
pub use registry::{JobRegistry, ParseOutcome};
pub use tree::build_hierarchy;
