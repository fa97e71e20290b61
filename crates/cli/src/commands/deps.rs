// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency inspection for a single job

use crate::output::{print, OutputFormat};
use anyhow::Result;
use clap::Args;
use jilscope_jil::load_file;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct DepsArgs {
    /// JIL file to load
    pub file: PathBuf,

    /// Job name to inspect
    pub job: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct DepsView {
    job: String,
    depends_on: Vec<String>,
    required_by: Vec<String>,
}

impl fmt::Display for DepsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = vec![self.job.clone(), "depends on:".to_string()];
        if self.depends_on.is_empty() {
            lines.push("  (none)".to_string());
        }
        lines.extend(self.depends_on.iter().map(|name| format!("  {name}")));
        lines.push("required by:".to_string());
        if self.required_by.is_empty() {
            lines.push("  (none)".to_string());
        }
        lines.extend(self.required_by.iter().map(|name| format!("  {name}")));
        write!(f, "{}", lines.join("\n"))
    }
}

pub fn run(args: DepsArgs) -> Result<()> {
    let outcome = load_file(&args.file)?;
    let job = outcome
        .registry
        .get(&args.job)
        .ok_or_else(|| anyhow::anyhow!("unknown job: {}", args.job))?;

    let view = DepsView {
        job: job.name.clone(),
        depends_on: job.depends_on.clone(),
        required_by: job.required_by.clone(),
    };
    print(&view, args.format);

    Ok(())
}
