//! Shared fixtures for unit tests.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::{json, Value};

use crate::cassette::config::SharedReplayer;
use crate::cassette::format::{Cassette, Interaction};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{GitRepo, PortError};

/// In-memory git double; `checkout` records the branch it was asked for.
pub(crate) struct FakeGit {
    pub head_valid: bool,
    pub current: Mutex<Option<String>>,
    pub branches: Vec<&'static str>,
    pub head: &'static str,
    pub parent: Option<&'static str>,
    pub diff: String,
    pub fail_parent: bool,
    pub fail_checkout: bool,
}

impl Default for FakeGit {
    fn default() -> Self {
        Self {
            head_valid: true,
            current: Mutex::new(Some("main".into())),
            branches: vec!["main"],
            head: "c2c2c2c2c2c2c2c2",
            parent: Some("c1c1c1c1c1c1c1c1"),
            diff: "diff --git a/app.py b/app.py\n+print('hi')\n".into(),
            fail_parent: false,
            fail_checkout: false,
        }
    }
}

impl FakeGit {
    pub fn current(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }
}

impl GitRepo for FakeGit {
    fn head_is_valid(&self, _repo: &Path) -> Result<bool, PortError> {
        Ok(self.head_valid)
    }

    fn current_branch(&self, _repo: &Path) -> Result<Option<String>, PortError> {
        Ok(self.current())
    }

    fn branch_exists(&self, _repo: &Path, branch: &str) -> Result<bool, PortError> {
        Ok(self.branches.contains(&branch))
    }

    fn checkout(&self, _repo: &Path, branch: &str) -> Result<(), PortError> {
        if self.fail_checkout {
            return Err("local changes would be overwritten".into());
        }
        *self.current.lock().unwrap() = Some(branch.to_string());
        Ok(())
    }

    fn head_commit(&self, _repo: &Path) -> Result<String, PortError> {
        Ok(self.head.to_string())
    }

    fn first_parent(&self, _repo: &Path, _commit: &str) -> Result<Option<String>, PortError> {
        if self.fail_parent {
            return Err("bad object".into());
        }
        Ok(self.parent.map(String::from))
    }

    fn diff(&self, _repo: &Path, _from: &str, _to: &str) -> Result<String, PortError> {
        Ok(self.diff.clone())
    }
}

/// A directory that passes the `.git` check and holds one source file.
pub(crate) fn repo_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::write(dir.path().join("app.py"), "print('hi')\n").unwrap();
    dir
}

/// Builds a replayer serving `(method, output)` pairs for one port.
pub(crate) fn replayer(port: &str, calls: &[(&str, Value)]) -> SharedReplayer {
    let interactions = calls
        .iter()
        .enumerate()
        .map(|(seq, (method, output))| Interaction {
            seq: seq as u64,
            port: port.to_string(),
            method: (*method).to_string(),
            input: json!(null),
            output: output.clone(),
        })
        .collect();
    let cassette = Cassette { name: format!("{port}-test"), recorded_at: Utc::now(), interactions };
    Arc::new(Mutex::new(CassetteReplayer::new(&cassette)))
}
