//! Failure mode specs.

use crate::prelude::*;

#[test]
fn missing_file_reports_the_path() {
    let temp = Project::empty();

    temp.jilscope()
        .args(&["show", "absent.jil"])
        .fails_with(1)
        .stderr_has("absent.jil");
}

#[test]
fn no_arguments_is_a_usage_error() {
    Project::empty().jilscope().fails_with(2);
}

#[test]
fn diff_with_one_file_is_a_usage_error() {
    let temp = Project::empty();
    temp.file("a.jil", SAMPLE_JIL);

    temp.jilscope().args(&["diff", "a.jil"]).fails_with(2);
}

#[test]
fn directory_instead_of_file_is_an_io_error() {
    let temp = Project::empty();
    temp.file("dir/inner.jil", SAMPLE_JIL);

    temp.jilscope().args(&["order", "dir"]).fails_with(1);
}
