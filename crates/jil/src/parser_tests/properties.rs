// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests over generated job graphs.

use crate::parse_source;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
struct PlannedJob {
    name: String,
    parent: Option<String>,
    deps: Vec<String>,
}

/// Strategy for a set of jobs with arbitrary parent and dependency
/// edges, cycles included.
fn plan_strategy() -> impl Strategy<Value = Vec<PlannedJob>> {
    prop::collection::hash_set("[A-Z][A-Z0-9_]{0,6}", 1..10).prop_flat_map(|names| {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();
        let n = names.len();
        prop::collection::vec(
            (prop::option::of(0..n), prop::collection::vec(0..n, 0..3)),
            n,
        )
        .prop_map(move |shapes| {
            shapes
                .into_iter()
                .enumerate()
                .map(|(i, (parent, deps))| PlannedJob {
                    name: names[i].clone(),
                    parent: parent.map(|p| names[p].clone()),
                    deps: deps.into_iter().map(|d| names[d].clone()).collect(),
                })
                .collect()
        })
    })
}

/// Strategy restricted to acyclic dependency graphs: edges only point
/// at earlier jobs.
fn acyclic_plan_strategy() -> impl Strategy<Value = Vec<PlannedJob>> {
    prop::collection::hash_set("[A-Z][A-Z0-9_]{0,6}", 2..10).prop_flat_map(|names| {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();
        let n = names.len();
        prop::collection::vec(prop::collection::vec(0..n, 0..3), n).prop_map(move |dep_sets| {
            dep_sets
                .into_iter()
                .enumerate()
                .map(|(i, deps)| PlannedJob {
                    name: names[i].clone(),
                    parent: None,
                    deps: deps
                        .into_iter()
                        .filter(|d| *d < i)
                        .map(|d| names[d].clone())
                        .collect(),
                })
                .collect()
        })
    })
}

fn render_jil(plan: &[PlannedJob]) -> String {
    let mut text = String::new();
    for job in plan {
        text.push_str(&format!("insert_job: {}\njob_type: CMD\n", job.name));
        if let Some(parent) = &job.parent {
            text.push_str(&format!("box_name: {parent}\n"));
        }
        if !job.deps.is_empty() {
            let refs: Vec<String> = job.deps.iter().map(|d| format!("success({d})")).collect();
            text.push_str(&format!("condition: {}\n", refs.join(" & ")));
        }
        text.push('\n');
    }
    text
}

proptest! {
    /// Every distinct name becomes exactly one registry entry.
    #[test]
    fn registry_keys_every_distinct_name_once(plan in plan_strategy()) {
        let outcome = parse_source(&render_jil(&plan));
        prop_assert_eq!(outcome.registry.len(), plan.len());
        for job in &plan {
            prop_assert!(outcome.registry.contains(&job.name));
        }
    }

    /// The execution order is total: every job exactly once, even with
    /// cycles in the input.
    #[test]
    fn execution_order_is_total(plan in plan_strategy()) {
        let outcome = parse_source(&render_jil(&plan));
        prop_assert_eq!(outcome.execution_order.len(), outcome.registry.len());
        let unique: HashSet<&String> = outcome.execution_order.iter().collect();
        prop_assert_eq!(unique.len(), outcome.execution_order.len());
        for name in outcome.registry.names() {
            prop_assert!(outcome.execution_order.iter().any(|n| n == name));
        }
    }

    /// `required_by` holds exactly the resolvable inverses of `depends_on`.
    #[test]
    fn reverse_edges_mirror_forward_edges(plan in plan_strategy()) {
        let outcome = parse_source(&render_jil(&plan));
        for job in outcome.registry.jobs() {
            for dep in &job.depends_on {
                if let Some(target) = outcome.registry.get(dep) {
                    prop_assert!(target.required_by.contains(&job.name));
                }
            }
            for back in &job.required_by {
                let dependent = outcome.registry.get(back);
                prop_assert!(dependent.is_some_and(|d| d.depends_on.contains(&job.name)));
            }
        }
    }

    /// Every job lands exactly once across the root list and all
    /// children lists, parent cycles included.
    #[test]
    fn every_job_is_root_or_child_exactly_once(plan in plan_strategy()) {
        let outcome = parse_source(&render_jil(&plan));
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for name in &outcome.root_boxes {
            *seen.entry(name.as_str()).or_default() += 1;
        }
        for job in outcome.registry.jobs() {
            for child in &job.children {
                *seen.entry(child.as_str()).or_default() += 1;
            }
        }
        for name in outcome.registry.names() {
            prop_assert_eq!(seen.get(name).copied(), Some(1));
        }
    }

    /// Depth equals the number of parent hops to a root; jobs trapped in
    /// a parent cycle keep depth zero.
    #[test]
    fn depth_counts_parent_hops(plan in plan_strategy()) {
        let outcome = parse_source(&render_jil(&plan));
        for job in outcome.registry.jobs() {
            let mut hops = 0usize;
            let mut current = job;
            let mut trail: HashSet<&str> = HashSet::new();
            let reaches_root = loop {
                if !trail.insert(current.name.as_str()) {
                    break false;
                }
                match current.parent.as_ref().and_then(|p| outcome.registry.get(p)) {
                    Some(parent) => {
                        hops += 1;
                        current = parent;
                    }
                    None => break true,
                }
            };
            if reaches_root {
                prop_assert_eq!(job.depth, hops);
            } else {
                prop_assert_eq!(job.depth, 0);
            }
        }
    }

    /// On acyclic inputs every dependency sits strictly earlier in the
    /// execution order than its dependents.
    #[test]
    fn acyclic_dependencies_come_earlier(plan in acyclic_plan_strategy()) {
        let outcome = parse_source(&render_jil(&plan));
        let position: HashMap<&str, usize> = outcome
            .execution_order
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        for job in outcome.registry.jobs() {
            for dep in &job.depends_on {
                if outcome.registry.contains(dep) {
                    prop_assert!(position[dep.as_str()] < position[job.name.as_str()]);
                }
            }
        }
    }

    /// Root and sibling lists follow execution-order positions.
    #[test]
    fn display_lists_follow_execution_positions(plan in plan_strategy()) {
        let outcome = parse_source(&render_jil(&plan));
        let position: HashMap<&str, usize> = outcome
            .execution_order
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        let sorted = |list: &[String]| {
            list.windows(2)
                .all(|pair| position[pair[0].as_str()] < position[pair[1].as_str()])
        };
        prop_assert!(sorted(&outcome.root_boxes));
        for job in outcome.registry.jobs() {
            prop_assert!(sorted(&job.children));
        }
    }

    /// Line comments are invisible to the parse.
    #[test]
    fn comment_lines_do_not_change_the_outcome(plan in plan_strategy()) {
        let text = render_jil(&plan);
        let commented: String = text
            .lines()
            .flat_map(|line| [line, "// noise: ignored"])
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(parse_source(&text), parse_source(&commented));
    }

    /// Parsing is a pure function of the text.
    #[test]
    fn reparsing_is_identical(plan in plan_strategy()) {
        let text = render_jil(&plan);
        prop_assert_eq!(parse_source(&text), parse_source(&text));
    }
}
