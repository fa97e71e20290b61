// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two-file comparison

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use jilscope_core::diff_registries;
use jilscope_jil::load_file;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Baseline JIL file
    pub before: PathBuf,

    /// Updated JIL file
    pub after: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Exits 1 when the files differ, mirroring `diff(1)`.
pub fn run(args: DiffArgs) -> Result<()> {
    let before = load_file(&args.before)?;
    let after = load_file(&args.after)?;

    let report = diff_registries(&before.registry, &after.registry);
    debug!(
        added = report.added.len(),
        removed = report.removed.len(),
        changed = report.changed.len(),
        "comparison complete"
    );

    match args.format {
        OutputFormat::Text => {
            if report.is_empty() {
                println!("No differences.");
            } else {
                print!("{report}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
