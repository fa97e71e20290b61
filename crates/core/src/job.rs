// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The job record parsed from an `insert_job:` block.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Job classification from the `job_type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    /// A container whose children are other jobs; no action of its own.
    #[serde(rename = "BOX")]
    Box,
    /// A command job.
    #[serde(rename = "CMD")]
    Cmd,
    /// A file transfer job.
    #[serde(rename = "FT")]
    FileTransfer,
    /// No `job_type` attribute seen, or an unrecognized code.
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl JobType {
    /// Map a `job_type` attribute value to a type. The value is
    /// upper-cased first, so `box` and `BOX` are equivalent.
    pub fn from_code(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "BOX" => JobType::Box,
            "CMD" => JobType::Cmd,
            "FT" => JobType::FileTransfer,
            _ => JobType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Box => "BOX",
            JobType::Cmd => "CMD",
            JobType::FileTransfer => "FT",
            JobType::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single job definition.
///
/// `children`, `required_by`, and `depth` are derived fields: they are
/// empty/zero until the graph and hierarchy passes fill them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique name, the registry key.
    pub name: String,
    /// Classification from the `job_type` attribute.
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Name of the enclosing box from `box_name`, unvalidated at parse time.
    pub parent: Option<String>,
    /// Names of jobs whose `box_name` resolves to this job, in display order.
    pub children: Vec<String>,
    /// All attributes without first-class fields, original key casing.
    pub attributes: IndexMap<String, String>,
    /// Convenience copy of the `description` attribute.
    pub description: Option<String>,
    /// Names referenced by this job's `condition`, first-seen order, no duplicates.
    pub depends_on: Vec<String>,
    /// Names of jobs whose `condition` references this job. Derived.
    pub required_by: Vec<String>,
    /// Tree depth from the root (root = 0).
    pub depth: usize,
    /// Position in file order at parse time; stable tie-break.
    pub original_index: usize,
}

impl Job {
    pub fn new(name: impl Into<String>, original_index: usize) -> Self {
        Job {
            name: name.into(),
            job_type: JobType::Unknown,
            parent: None,
            children: Vec::new(),
            attributes: IndexMap::new(),
            description: None,
            depends_on: Vec::new(),
            required_by: Vec::new(),
            depth: 0,
            original_index,
        }
    }

    /// Record a forward dependency edge. Idempotent, preserves first-seen order.
    pub fn add_dependency(&mut self, name: &str) {
        if !self.depends_on.iter().any(|d| d == name) {
            self.depends_on.push(name.to_string());
        }
    }

    /// Record a reverse dependency edge. Idempotent, preserves first-seen order.
    pub fn add_dependent(&mut self, name: &str) {
        if !self.required_by.iter().any(|d| d == name) {
            self.required_by.push(name.to_string());
        }
    }

    /// Look up an attribute by exact key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn is_box(&self) -> bool {
        self.job_type == JobType::Box
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
