#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub inbox: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let inbox = tmp.path().join("inbox");
        fs::create_dir_all(&inbox).expect("create inbox");

        Self {
            _tmp: tmp,
            home,
            inbox,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("tidyname");
        cmd.env("HOME", &self.home)
            .env_remove("TIDYNAME_HISTORY")
            .env_remove("TIDYNAME_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Runs a command against the inbox directory and returns `data`.
    pub fn run_inbox(&self, command: &str, extra: &[&str]) -> Value {
        let inbox = self.inbox_str();
        let mut args = vec![command, inbox.as_str()];
        args.extend_from_slice(extra);
        let out = self.run_json(&args);
        assert_eq!(out["ok"], true);
        out["data"].clone()
    }

    pub fn inbox_str(&self) -> String {
        self.inbox.to_str().expect("inbox path utf8").to_string()
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        let path = self.inbox.join(name);
        fs::write(&path, name).expect("write fixture file");
        path
    }

    pub fn history_path(&self) -> PathBuf {
        self.home.join(".config/tidyname/history.json")
    }
}

pub fn set_mtime(path: &Path, secs: u64) {
    let f = fs::File::options()
        .write(true)
        .open(path)
        .expect("open for mtime");
    f.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .expect("set mtime");
}

pub fn names(items: &Value, key: &str) -> Vec<String> {
    items
        .as_array()
        .expect("array")
        .iter()
        .map(|i| i[key].as_str().expect("string field").to_string())
        .collect()
}
