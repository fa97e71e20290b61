// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Insertion-ordered job registry and the parse result bundle.

use crate::job::Job;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// All parsed jobs, keyed by name.
///
/// Iteration order is insertion order, which is file parse order. Every
/// ordering rule downstream (sequencer seeding, hierarchy append order)
/// is defined in terms of it, so the backing map must preserve it.
/// Re-inserting an existing name replaces the record wholesale but keeps
/// the name's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRegistry {
    jobs: IndexMap<String, Job>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a job under its own name. Last write wins for duplicates.
    pub fn insert(&mut self, job: Job) {
        self.jobs.insert(job.name.clone(), job);
    }

    pub fn get(&self, name: &str) -> Option<&Job> {
        self.jobs.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Job> {
        self.jobs.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.jobs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Job names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.jobs.keys().map(String::as_str)
    }

    /// Jobs in registry order.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn jobs_mut(&mut self) -> impl Iterator<Item = &mut Job> {
        self.jobs.values_mut()
    }

    /// Rebuild every job's `required_by` from every job's `depends_on`.
    ///
    /// The reverse index is derived from scratch, never maintained
    /// incrementally. Dependency names that do not resolve produce no
    /// reverse edge; they stay visible in `depends_on`.
    pub fn link_dependents(&mut self) {
        for job in self.jobs.values_mut() {
            job.required_by.clear();
        }

        let edges: Vec<(String, Vec<String>)> = self
            .jobs
            .values()
            .map(|job| (job.name.clone(), job.depends_on.clone()))
            .collect();

        for (name, deps) in edges {
            for dep in deps {
                match self.jobs.get_mut(&dep) {
                    Some(target) => target.add_dependent(&name),
                    None => {
                        debug!(job = %name, dependency = %dep, "dependency does not resolve");
                    }
                }
            }
        }
    }
}

/// Everything one parse produces. A fresh value is built on every call;
/// nothing is retained between parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Name-keyed job registry in file parse order.
    pub registry: JobRegistry,
    /// Jobs with no resolvable parent, in display order.
    pub root_boxes: Vec<String>,
    /// Total order over all job names, dependencies first where possible.
    pub execution_order: Vec<String>,
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
