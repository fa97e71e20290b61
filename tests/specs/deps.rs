//! Dependency inspection specs.

use crate::prelude::*;

#[test]
fn shows_both_edge_directions() {
    let temp = Project::empty();
    temp.file("batch.jil", SAMPLE_JIL);

    temp.jilscope()
        .args(&["deps", "batch.jil", "EXTRACT"])
        .passes()
        .stdout_eq("EXTRACT\ndepends on:\n  (none)\nrequired by:\n  LOAD\n  REPORT\n");
}

#[test]
fn forward_edges_keep_first_seen_order() {
    let temp = Project::empty();
    temp.file("batch.jil", SAMPLE_JIL);

    temp.jilscope()
        .args(&["deps", "batch.jil", "REPORT"])
        .passes()
        .stdout_eq("REPORT\ndepends on:\n  LOAD\n  EXTRACT\nrequired by:\n  (none)\n");
}

#[test]
fn unknown_job_is_an_error() {
    let temp = Project::empty();
    temp.file("batch.jil", SAMPLE_JIL);

    temp.jilscope()
        .args(&["deps", "batch.jil", "GHOST"])
        .fails_with(1)
        .stderr_has("unknown job: GHOST");
}

#[test]
fn json_view_carries_all_three_fields() {
    let temp = Project::empty();
    temp.file("batch.jil", SAMPLE_JIL);

    let run = temp
        .jilscope()
        .args(&["deps", "batch.jil", "LOAD", "--format", "json"])
        .passes();
    let value = run.stdout_json();
    assert_eq!(value["job"], "LOAD");
    assert_eq!(value["depends_on"][0], "EXTRACT");
    assert_eq!(value["required_by"][0], "REPORT");
}
