// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry comparison for two-file diffs.

use crate::job::Job;
use crate::registry::JobRegistry;
use serde::Serialize;

/// Attribute keys compared between two versions of a job. Everything
/// else on the record is ignored by the comparison.
const COMPARED_ATTRIBUTES: [&str; 5] = ["command", "machine", "owner", "condition", "description"];

/// One field-level difference on a job present in both registries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field: String,
    pub before: String,
    pub after: String,
}

/// All field-level differences for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobChange {
    pub name: String,
    pub fields: Vec<FieldChange>,
}

/// Result of comparing two registries by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    /// Names only present in the newer registry, in its registry order.
    pub added: Vec<String>,
    /// Names only present in the older registry, in its registry order.
    pub removed: Vec<String>,
    /// Jobs present in both whose compared fields differ.
    pub changed: Vec<JobChange>,
}

impl DiffReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

impl std::fmt::Display for DiffReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for name in &self.added {
            writeln!(f, "+ {}", name)?;
        }
        for name in &self.removed {
            writeln!(f, "- {}", name)?;
        }
        for change in &self.changed {
            writeln!(f, "~ {}", change.name)?;
            for field in &change.fields {
                writeln!(
                    f,
                    "    {}: {:?} -> {:?}",
                    field.field, field.before, field.after
                )?;
            }
        }
        Ok(())
    }
}

/// Compare two parsed registries by name-keyed lookup.
///
/// Jobs present in both registries are compared attribute by attribute
/// on a fixed subset, plus a joined rendering of `depends_on`. Absent
/// values compare as empty strings.
pub fn diff_registries(before: &JobRegistry, after: &JobRegistry) -> DiffReport {
    let mut report = DiffReport::default();

    for job in after.jobs() {
        if !before.contains(&job.name) {
            report.added.push(job.name.clone());
        }
    }
    for job in before.jobs() {
        if !after.contains(&job.name) {
            report.removed.push(job.name.clone());
        }
    }
    for job in after.jobs() {
        let Some(old) = before.get(&job.name) else {
            continue;
        };
        let fields = changed_fields(old, job);
        if !fields.is_empty() {
            report.changed.push(JobChange {
                name: job.name.clone(),
                fields,
            });
        }
    }

    report
}

fn changed_fields(before: &Job, after: &Job) -> Vec<FieldChange> {
    let mut fields = Vec::new();
    for key in COMPARED_ATTRIBUTES {
        let old = before.attribute(key).unwrap_or("");
        let new = after.attribute(key).unwrap_or("");
        if old != new {
            fields.push(FieldChange {
                field: key.to_string(),
                before: old.to_string(),
                after: new.to_string(),
            });
        }
    }

    let old_deps = before.depends_on.join(" & ");
    let new_deps = after.depends_on.join(" & ");
    if old_deps != new_deps {
        fields.push(FieldChange {
            field: "depends_on".to_string(),
            before: old_deps,
            after: new_deps,
        });
    }

    fields
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
