// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Box hierarchy construction: parent/child links, depth, display order.

use crate::registry::JobRegistry;
use std::collections::HashMap;

/// Build the box hierarchy and return the ordered root list.
///
/// Children are rebuilt from every job's `parent` reference in registry
/// order. A job whose parent is absent or does not resolve is a root.
/// Depth is assigned walking down from the roots (root = 0). Finally the
/// root list and every children list are sorted by execution-order
/// position; a job without a position sorts by its `original_index`.
pub fn build_hierarchy(registry: &mut JobRegistry, execution_order: &[String]) -> Vec<String> {
    // Children and depth are derived state; rebuild from nothing
    for job in registry.jobs_mut() {
        job.children.clear();
        job.depth = 0;
    }

    let links: Vec<(String, String)> = registry
        .jobs()
        .filter_map(|job| {
            job.parent
                .as_ref()
                .filter(|parent| registry.contains(parent))
                .map(|parent| (parent.clone(), job.name.clone()))
        })
        .collect();
    for (parent, child) in links {
        if let Some(parent_job) = registry.get_mut(&parent) {
            parent_job.children.push(child);
        }
    }

    let mut roots: Vec<String> = registry
        .jobs()
        .filter(|job| match &job.parent {
            None => true,
            Some(parent) => !registry.contains(parent),
        })
        .map(|job| job.name.clone())
        .collect();

    // Depth walk from the roots. Every job has at most one parent, so
    // each job is enqueued at most once; parent cycles are simply never
    // reached and stay at depth 0.
    let mut queue: Vec<(String, usize)> = roots.iter().map(|name| (name.clone(), 0)).collect();
    while let Some((name, depth)) = queue.pop() {
        let children = match registry.get_mut(&name) {
            Some(job) => {
                job.depth = depth;
                job.children.clone()
            }
            None => continue,
        };
        for child in children {
            queue.push((child, depth + 1));
        }
    }

    let position: HashMap<&str, usize> = execution_order
        .iter()
        .enumerate()
        .map(|(pos, name)| (name.as_str(), pos))
        .collect();
    let fallback: HashMap<String, usize> = registry
        .jobs()
        .map(|job| (job.name.clone(), job.original_index))
        .collect();
    let rank = |name: &str| {
        position
            .get(name)
            .copied()
            .unwrap_or_else(|| fallback.get(name).copied().unwrap_or(usize::MAX))
    };

    roots.sort_by_key(|name| rank(name));
    for job in registry.jobs_mut() {
        job.children.sort_by_key(|name| rank(name));
    }

    roots
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
