// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! JIL text parsing
//!
//! Turns AutoSys-style job definition text into a
//! [`jilscope_core::ParseOutcome`]: the job registry, the root boxes,
//! and a dependency-respecting execution order. Parsing never fails;
//! malformed input degrades to partially populated jobs.

mod attributes;
mod condition;
mod loader;
mod parser;
mod scanner;

pub use loader::{load_file, LoadError};
pub use parser::parse_source;
