//! Execution order specs.

use crate::prelude::*;

#[test]
fn dependencies_come_before_dependents() {
    let temp = Project::empty();
    temp.file("batch.jil", SAMPLE_JIL);

    temp.jilscope()
        .args(&["order", "batch.jil"])
        .passes()
        .stdout_eq("NIGHTLY_BOX\nEXTRACT\nLOAD\nREPORT\n");
}

#[test]
fn cycles_warn_on_stderr_but_still_list_every_job() {
    let temp = Project::empty();
    temp.file(
        "cycle.jil",
        "insert_job: A\ncondition: success(B)\n\ninsert_job: B\ncondition: success(A)\n",
    );

    temp.jilscope()
        .args(&["order", "cycle.jil"])
        .passes()
        .stdout_eq("B\nA\n")
        .stderr_has("dependency cycle");
}

#[test]
fn json_emits_the_order_as_an_array() {
    let temp = Project::empty();
    temp.file("batch.jil", SAMPLE_JIL);

    let run = temp
        .jilscope()
        .args(&["order", "batch.jil", "--format", "json"])
        .passes();
    let value = run.stdout_json();
    assert_eq!(value[0], "NIGHTLY_BOX");
    assert_eq!(value[3], "REPORT");
}
