//! Hierarchy display specs.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn renders_the_box_hierarchy_with_indentation() {
    let temp = Project::empty();
    temp.file("batch.jil", SAMPLE_JIL);

    let run = temp.jilscope().args(&["show", "batch.jil"]).passes();
    assert_eq!(
        run.stdout_text(),
        "NIGHTLY_BOX [BOX]  nightly processing\n  EXTRACT [CMD]\n  LOAD [CMD]\nREPORT [CMD]\n"
    );
}

#[test]
fn dangling_parent_is_shown_as_a_root() {
    let temp = Project::empty();
    temp.file("orphan.jil", "insert_job: ORPHAN\njob_type: CMD\nbox_name: GONE\n");

    temp.jilscope()
        .args(&["show", "orphan.jil"])
        .passes()
        .stdout_eq("ORPHAN [CMD]\n");
}

#[test]
fn unrecognized_job_type_displays_as_unknown() {
    let temp = Project::empty();
    temp.file("odd.jil", "insert_job: ODD\njob_type: banana\n");

    temp.jilscope()
        .args(&["show", "odd.jil"])
        .passes()
        .stdout_eq("ODD [UNKNOWN]\n");
}

#[test]
fn json_carries_the_full_parse_outcome() {
    let temp = Project::empty();
    temp.file("batch.jil", SAMPLE_JIL);

    let run = temp
        .jilscope()
        .args(&["show", "batch.jil", "--format", "json"])
        .passes();
    let value = run.stdout_json();
    assert_eq!(value["registry"]["NIGHTLY_BOX"]["type"], "BOX");
    assert_eq!(value["registry"]["LOAD"]["depends_on"][0], "EXTRACT");
    assert_eq!(value["registry"]["EXTRACT"]["required_by"][1], "REPORT");
    assert_eq!(value["root_boxes"][0], "NIGHTLY_BOX");
    assert_eq!(value["execution_order"][3], "REPORT");
}

#[test]
fn empty_file_shows_nothing() {
    let temp = Project::empty();
    temp.file("empty.jil", "");

    temp.jilscope()
        .args(&["show", "empty.jil"])
        .passes()
        .stdout_eq("");
}
