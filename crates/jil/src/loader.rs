// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File loading
//!
//! The only fallible layer. Once the text is in memory, parsing cannot
//! fail.

use crate::parser::parse_source;
use jilscope_core::ParseOutcome;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading JIL input from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error reading a JIL file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a JIL file and parse it.
pub fn load_file(path: impl AsRef<Path>) -> Result<ParseOutcome, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_source(&text))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
