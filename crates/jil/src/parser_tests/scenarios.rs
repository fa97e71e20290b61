// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end parses of small JIL documents.

use super::helpers::{job, position};
use crate::parse_source;
use jilscope_core::JobType;

#[test]
fn dependency_produces_both_edge_directions_and_order() {
    let outcome = parse_source(
        "insert_job: A\njob_type: CMD\ncommand: echo A\n\n\
         insert_job: B\njob_type: CMD\ncondition: success(A)\ncommand: echo B\n",
    );
    assert_eq!(outcome.registry.len(), 2);
    assert_eq!(job(&outcome, "B").depends_on, vec!["A"]);
    assert_eq!(job(&outcome, "A").required_by, vec!["B"]);
    assert_eq!(outcome.execution_order, vec!["A", "B"]);
    assert_eq!(outcome.root_boxes, vec!["A", "B"]);
}

#[test]
fn box_membership_sets_children_and_depth() {
    let outcome = parse_source(
        "insert_job: PARENT\njob_type: BOX\n\n\
         insert_job: CHILD\njob_type: CMD\nbox_name: PARENT\n",
    );
    assert_eq!(outcome.root_boxes, vec!["PARENT"]);
    assert_eq!(job(&outcome, "PARENT").children, vec!["CHILD"]);
    assert_eq!(job(&outcome, "PARENT").depth, 0);
    assert_eq!(job(&outcome, "CHILD").depth, 1);
    assert!(job(&outcome, "PARENT").is_box());
}

#[test]
fn dangling_parent_demotes_to_root() {
    let outcome = parse_source("insert_job: CHILD\njob_type: CMD\nbox_name: MISSING\n");
    assert_eq!(outcome.registry.len(), 1);
    assert_eq!(outcome.root_boxes, vec!["CHILD"]);
    // The unresolved parent stays visible on the job
    assert_eq!(job(&outcome, "CHILD").parent.as_deref(), Some("MISSING"));
    assert_eq!(job(&outcome, "CHILD").depth, 0);
}

#[test]
fn mutual_cycle_terminates_with_both_jobs_once() {
    let outcome = parse_source(
        "insert_job: A\ncondition: success(B)\n\n\
         insert_job: B\ncondition: success(A)\n",
    );
    assert_eq!(outcome.execution_order.len(), 2);
    assert!(outcome.execution_order.contains(&"A".to_string()));
    assert!(outcome.execution_order.contains(&"B".to_string()));
}

#[test]
fn block_comment_text_never_reaches_the_following_job() {
    let outcome = parse_source(
        "/* retired\ncommand: ghost\nowner: ghost */\n\
         insert_job: REAL\njob_type: CMD\ncommand: echo real\n",
    );
    assert_eq!(outcome.registry.len(), 1);
    let real = job(&outcome, "REAL");
    assert_eq!(real.attribute("command"), Some("echo real"));
    assert_eq!(real.attribute("owner"), None);
}

#[test]
fn duplicate_name_keeps_last_definition_wholesale() {
    let outcome = parse_source(
        "insert_job: X\njob_type: CMD\ncommand: echo first\nowner: alice\n\n\
         insert_job: X\njob_type: BOX\ncommand: echo second\n",
    );
    assert_eq!(outcome.registry.len(), 1);
    let x = job(&outcome, "X");
    assert_eq!(x.job_type, JobType::Box);
    assert_eq!(x.attribute("command"), Some("echo second"));
    assert_eq!(x.attribute("owner"), None);
    assert_eq!(x.original_index, 1);
}

#[test]
fn children_are_resorted_by_execution_position() {
    // LOAD is defined before EXTRACT but depends on it, so the sibling
    // order inside the box flips relative to registry order
    let outcome = parse_source(
        "insert_job: NIGHTLY job_type: BOX\ndescription: \"nightly batch\"\n\n\
         insert_job: LOAD\njob_type: CMD\nbox_name: NIGHTLY\ncondition: success(EXTRACT)\ncommand: run load\n\n\
         insert_job: EXTRACT\njob_type: CMD\nbox_name: NIGHTLY\ncommand: run extract\n",
    );
    assert_eq!(outcome.root_boxes, vec!["NIGHTLY"]);
    assert_eq!(outcome.execution_order, vec!["NIGHTLY", "EXTRACT", "LOAD"]);
    assert_eq!(job(&outcome, "NIGHTLY").children, vec!["EXTRACT", "LOAD"]);
    assert_eq!(job(&outcome, "NIGHTLY").attribute("description"), Some("nightly batch"));
    assert_eq!(job(&outcome, "EXTRACT").depth, 1);
    assert_eq!(job(&outcome, "LOAD").depth, 1);
}

#[test]
fn chained_dependencies_order_strictly() {
    let outcome = parse_source(
        "insert_job: C\ncondition: success(B)\n\n\
         insert_job: B\ncondition: success(A)\n\n\
         insert_job: A\ncommand: echo start\n",
    );
    assert!(position(&outcome, "A") < position(&outcome, "B"));
    assert!(position(&outcome, "B") < position(&outcome, "C"));
}

#[test]
fn nested_boxes_accumulate_depth() {
    let outcome = parse_source(
        "insert_job: TOP\njob_type: BOX\n\n\
         insert_job: MID\njob_type: BOX\nbox_name: TOP\n\n\
         insert_job: LEAF\njob_type: CMD\nbox_name: MID\n",
    );
    assert_eq!(job(&outcome, "TOP").depth, 0);
    assert_eq!(job(&outcome, "MID").depth, 1);
    assert_eq!(job(&outcome, "LEAF").depth, 2);
    assert_eq!(outcome.root_boxes, vec!["TOP"]);
}

#[test]
fn dependency_on_undefined_job_stays_visible() {
    let outcome = parse_source("insert_job: A\ncondition: success(GHOST)\n");
    assert_eq!(job(&outcome, "A").depends_on, vec!["GHOST"]);
    assert_eq!(outcome.execution_order, vec!["A"]);
}

#[test]
fn empty_and_comment_only_input_parses_to_nothing() {
    for text in ["", "\n\n", "// only a comment\n", "/* only\na block */\n"] {
        let outcome = parse_source(text);
        assert!(outcome.registry.is_empty());
        assert!(outcome.root_boxes.is_empty());
        assert!(outcome.execution_order.is_empty());
    }
}

#[test]
fn same_line_attributes_apply_like_block_lines() {
    let outcome = parse_source("insert_job: J job_type: CMD owner: batch\n");
    let j = job(&outcome, "J");
    assert_eq!(j.job_type, JobType::Cmd);
    assert_eq!(j.attribute("owner"), Some("batch"));
}

#[test]
fn reparsing_the_same_text_gives_an_identical_outcome() {
    let text = "insert_job: BOX_A\njob_type: BOX\n\n\
                insert_job: J1\nbox_name: BOX_A\ncondition: success(J2)\n\n\
                insert_job: J2\nbox_name: BOX_A\ncommand: echo hi\n";
    assert_eq!(parse_source(text), parse_source(text));
}
