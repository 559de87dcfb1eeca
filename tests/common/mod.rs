#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub settings: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let settings = tmp.path().join("settings.json");

        Self {
            _tmp: tmp,
            home,
            settings,
        }
    }

    pub fn with_tokens(sandbox: &str, production: &str) -> Self {
        let env = Self::new();
        fs::write(
            &env.settings,
            serde_json::json!({
                "ZENODO_TOKEN_SANDBOX": sandbox,
                "ZENODO_TOKEN_PRODUCTION": production
            })
            .to_string(),
        )
        .expect("write settings");
        env
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("zenodo");
        cmd.env("HOME", &self.home)
            .env_remove("ZENODO_TOKEN_SANDBOX")
            .env_remove("ZENODO_TOKEN_PRODUCTION")
            .env_remove("RUST_LOG")
            .arg("--settings")
            .arg(&self.settings);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }
}
