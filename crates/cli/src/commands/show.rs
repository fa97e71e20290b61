// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchy display

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use jilscope_core::ParseOutcome;
use jilscope_jil::load_file;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// JIL file to load
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let outcome = load_file(&args.file)?;

    match args.format {
        OutputFormat::Text => print!("{}", render_tree(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

/// Render the box hierarchy, one job per line, indented two spaces per
/// depth level. Jobs caught in a parent cycle are unreachable from any
/// root and do not appear.
fn render_tree(outcome: &ParseOutcome) -> String {
    let mut text = String::new();
    let mut stack: Vec<&str> = outcome.root_boxes.iter().rev().map(String::as_str).collect();

    while let Some(name) = stack.pop() {
        let Some(job) = outcome.registry.get(name) else {
            continue;
        };
        let indent = "  ".repeat(job.depth);
        match &job.description {
            Some(desc) if !desc.is_empty() => {
                let _ = writeln!(text, "{indent}{} [{}]  {desc}", job.name, job.job_type);
            }
            _ => {
                let _ = writeln!(text, "{indent}{} [{}]", job.name, job.job_type);
            }
        }
        for child in job.children.iter().rev() {
            stack.push(child);
        }
    }

    text
}
