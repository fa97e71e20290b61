//! Shared helpers for CLI specs.

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small but representative JIL document: one box with two members,
/// one free-standing job depending on both.
pub const SAMPLE_JIL: &str = "\
insert_job: NIGHTLY_BOX
job_type: BOX
description: \"nightly processing\"

insert_job: EXTRACT
job_type: CMD
box_name: NIGHTLY_BOX
command: /opt/batch/extract.sh
machine: batch01
owner: autosys

insert_job: LOAD
job_type: CMD
box_name: NIGHTLY_BOX
condition: success(EXTRACT)
command: /opt/batch/load.sh
machine: batch01

insert_job: REPORT
job_type: CMD
condition: success(LOAD) & success(EXTRACT)
command: /opt/batch/report.sh
";

/// Scratch directory the CLI runs against.
pub struct Project {
    root: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write a file under the project root, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// Command builder for the jilscope binary, rooted at this project.
    pub fn jilscope(&self) -> Jilscope {
        let mut cmd = Command::cargo_bin("jilscope").expect("binary builds");
        cmd.current_dir(self.root.path());
        Jilscope { cmd }
    }
}

pub struct Jilscope {
    cmd: Command,
}

impl Jilscope {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Run expecting exit 0.
    pub fn passes(mut self) -> Run {
        Run {
            assert: self.cmd.assert().success(),
        }
    }

    /// Run expecting a specific nonzero exit code.
    pub fn fails_with(mut self, code: i32) -> Run {
        Run {
            assert: self.cmd.assert().code(code),
        }
    }
}

pub struct Run {
    assert: Assert,
}

impl Run {
    pub fn stdout_has(self, needle: &str) -> Self {
        Self {
            assert: self.assert.stdout(predicates::str::contains(needle)),
        }
    }

    pub fn stdout_eq(self, exact: &str) -> Self {
        Self {
            assert: self.assert.stdout(exact.to_string()),
        }
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Self {
            assert: self.assert.stderr(predicates::str::contains(needle)),
        }
    }

    /// Full stdout as UTF-8 text.
    pub fn stdout_text(&self) -> String {
        String::from_utf8(self.assert.get_output().stdout.clone()).expect("stdout is UTF-8")
    }

    /// Stdout parsed as JSON.
    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.assert.get_output().stdout).expect("stdout is valid JSON")
    }
}
