//! Top-level CLI surface specs.

use crate::prelude::*;

#[test]
fn help_lists_every_subcommand() {
    Project::empty()
        .jilscope()
        .args(&["--help"])
        .passes()
        .stdout_has("show")
        .stdout_has("order")
        .stdout_has("deps")
        .stdout_has("diff")
        .stdout_has("completions");
}

#[test]
fn version_prints_the_tool_name() {
    Project::empty()
        .jilscope()
        .args(&["--version"])
        .passes()
        .stdout_has("jilscope");
}

#[test]
fn completions_emit_a_script_mentioning_the_binary() {
    Project::empty()
        .jilscope()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("jilscope");
}
