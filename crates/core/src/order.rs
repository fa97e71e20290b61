// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cycle-tolerant topological ordering of the dependency graph.

use crate::registry::JobRegistry;
use std::collections::HashSet;
use tracing::warn;

/// Work items for the iterative depth-first walk. An `Enter` expands a
/// job's dependencies; the matching `Exit` emits the job post-order.
enum Frame<'a> {
    Enter(&'a str),
    Exit(&'a str),
}

/// Compute a total execution order over all registered jobs.
///
/// Depth-first post-order over `depends_on`: dependencies are emitted
/// before their dependents wherever the subgraph is acyclic. Reaching a
/// job already on the active path is a cycle; the walk notes it and
/// backs off there, so cyclic components still terminate and every job
/// is emitted exactly once. The driver seeds from dependency-free jobs
/// in registry order, then sweeps the remaining jobs in registry order.
pub fn execution_order(registry: &JobRegistry) -> Vec<String> {
    let mut order = Vec::with_capacity(registry.len());
    let mut visited: HashSet<&str> = HashSet::new();
    let mut in_progress: HashSet<&str> = HashSet::new();

    for job in registry.jobs().filter(|job| job.depends_on.is_empty()) {
        visit(
            registry,
            job.name.as_str(),
            &mut visited,
            &mut in_progress,
            &mut order,
        );
    }
    for name in registry.names() {
        visit(registry, name, &mut visited, &mut in_progress, &mut order);
    }

    order
}

/// One depth-first pass from `start`, with an explicit stack so that
/// pathological dependency depth cannot exhaust the call stack.
fn visit<'a>(
    registry: &'a JobRegistry,
    start: &'a str,
    visited: &mut HashSet<&'a str>,
    in_progress: &mut HashSet<&'a str>,
    order: &mut Vec<String>,
) {
    let mut stack = vec![Frame::Enter(start)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(name) => {
                if visited.contains(name) {
                    continue;
                }
                if in_progress.contains(name) {
                    warn!(job = %name, "dependency cycle detected, breaking at re-entry");
                    continue;
                }
                // Names that never resolve to a job are skipped entirely
                let Some(job) = registry.get(name) else {
                    continue;
                };
                in_progress.insert(name);
                stack.push(Frame::Exit(name));
                // Reversed so dependencies are expanded left to right
                for dep in job.depends_on.iter().rev() {
                    stack.push(Frame::Enter(dep.as_str()));
                }
            }
            Frame::Exit(name) => {
                in_progress.remove(name);
                visited.insert(name);
                order.push(name.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
