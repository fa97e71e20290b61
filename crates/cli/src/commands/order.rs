//! Execution order listing

use crate::output::{print_list, OutputFormat};
use anyhow::Result;
use clap::Args;
use jilscope_jil::load_file;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// JIL file to load
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: OrderArgs) -> Result<()> {
    let outcome = load_file(&args.file)?;
    print_list(&outcome.execution_order, args.format);
    Ok(())
}
