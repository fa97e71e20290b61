// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jilscope - JIL job definition inspector

mod commands;
mod completions;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{deps, diff, order, show};
use completions::{generate_completions, CompletionsArgs};

#[derive(Parser)]
#[command(
    name = "jilscope",
    version,
    about = "Inspect AutoSys JIL job definitions: hierarchy, execution order, dependencies"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the box hierarchy of a JIL file
    Show(show::ShowArgs),
    /// Print the computed execution order
    Order(order::OrderArgs),
    /// Show forward and reverse dependencies of one job
    Deps(deps::DepsArgs),
    /// Compare two JIL files
    Diff(diff::DiffArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Order(args) => order::run(args),
        Commands::Deps(args) => deps::run(args),
        Commands::Diff(args) => diff::run(args),
        Commands::Completions(args) => {
            generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}

/// Route parser diagnostics (cycle warnings, unresolved dependencies)
/// to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
