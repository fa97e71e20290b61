//! Two-file comparison specs.

use crate::prelude::*;

#[test]
fn identical_files_have_no_differences() {
    let temp = Project::empty();
    temp.file("a.jil", SAMPLE_JIL);
    temp.file("b.jil", SAMPLE_JIL);

    temp.jilscope()
        .args(&["diff", "a.jil", "b.jil"])
        .passes()
        .stdout_eq("No differences.\n");
}

#[test]
fn additions_and_removals_exit_one() {
    let temp = Project::empty();
    temp.file(
        "a.jil",
        "insert_job: KEEP\ncommand: echo\n\ninsert_job: OLD\ncommand: echo\n",
    );
    temp.file(
        "b.jil",
        "insert_job: KEEP\ncommand: echo\n\ninsert_job: NEW\ncommand: echo\n",
    );

    temp.jilscope()
        .args(&["diff", "a.jil", "b.jil"])
        .fails_with(1)
        .stdout_eq("+ NEW\n- OLD\n");
}

#[test]
fn changed_attributes_list_old_and_new_values() {
    let temp = Project::empty();
    temp.file("a.jil", "insert_job: J\ncommand: run v1\n");
    temp.file("b.jil", "insert_job: J\ncommand: run v2\n");

    temp.jilscope()
        .args(&["diff", "a.jil", "b.jil"])
        .fails_with(1)
        .stdout_has("~ J")
        .stdout_has("command: \"run v1\" -> \"run v2\"");
}

#[test]
fn dependency_rewires_are_reported() {
    let temp = Project::empty();
    temp.file("a.jil", "insert_job: J\ncondition: success(A)\n");
    temp.file("b.jil", "insert_job: J\ncondition: success(A) & success(B)\n");

    temp.jilscope()
        .args(&["diff", "a.jil", "b.jil"])
        .fails_with(1)
        .stdout_has("depends_on: \"A\" -> \"A & B\"");
}

#[test]
fn uncompared_attributes_do_not_trigger_a_difference() {
    let temp = Project::empty();
    temp.file("a.jil", "insert_job: J\ncommand: run\ngroup: night\n");
    temp.file("b.jil", "insert_job: J\ncommand: run\ngroup: day\n");

    temp.jilscope()
        .args(&["diff", "a.jil", "b.jil"])
        .passes()
        .stdout_eq("No differences.\n");
}

#[test]
fn json_report_groups_the_three_sections() {
    let temp = Project::empty();
    temp.file("a.jil", "insert_job: OLD\ncommand: echo\n");
    temp.file("b.jil", "insert_job: NEW\ncommand: echo\n");

    let run = temp
        .jilscope()
        .args(&["diff", "a.jil", "b.jil", "--format", "json"])
        .fails_with(1);
    let value = run.stdout_json();
    assert_eq!(value["added"][0], "NEW");
    assert_eq!(value["removed"][0], "OLD");
    assert!(value["changed"].as_array().unwrap().is_empty());
}
