mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn status_reports_unconfigured_without_failing() {
    let env = TestEnv::new();
    let out = env.run_json(&["status"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["environment"], "sandbox");
    assert_eq!(out["data"]["configured"], false);
    assert_eq!(out["data"]["token_key"], "ZENODO_TOKEN_SANDBOX");
}

#[test]
fn status_reads_production_token() {
    let env = TestEnv::with_tokens("", "prod-token");
    let out = env.run_json(&["--production", "status"]);
    assert_eq!(out["data"]["environment"], "production");
    assert_eq!(out["data"]["configured"], true);
}

#[test]
fn url_prints_sandbox_endpoint() {
    let env = TestEnv::with_tokens("abc", "");
    env.cmd()
        .arg("url")
        .assert()
        .success()
        .stdout("https://sandbox.zenodo.org/api/deposit/depositions?access_token=abc\n");
}

#[test]
fn url_prints_files_endpoint() {
    let env = TestEnv::with_tokens("", "p1");
    let out = env.run_json(&["--production", "url", "--deposition", "55"]);
    assert_eq!(
        out["data"],
        "https://zenodo.org/api/deposit/depositions/55/files?access_token=p1"
    );
}

#[test]
fn url_fails_when_unconfigured() {
    let env = TestEnv::new();
    env.cmd()
        .arg("url")
        .assert()
        .failure()
        .stderr(contains("not configured"));
}

#[test]
fn token_falls_back_to_environment() {
    let env = TestEnv::new();
    env.cmd()
        .env("ZENODO_TOKEN_SANDBOX", "from-env")
        .arg("url")
        .assert()
        .success()
        .stdout(contains("access_token=from-env"));
}

#[test]
fn create_without_token_reports_missing_token() {
    let env = TestEnv::new();
    let metadata = env.write_file("metadata.json", r#"{"metadata": {"title": "x"}}"#);
    env.cmd()
        .arg("create")
        .arg("--metadata")
        .arg(&metadata)
        .assert()
        .failure()
        .stderr(contains("No token defined"));
}

#[test]
fn create_rejects_non_object_metadata() {
    let env = TestEnv::with_tokens("abc", "");
    let metadata = env.write_file("metadata.json", "[1, 2, 3]");
    env.cmd()
        .arg("create")
        .arg("--metadata")
        .arg(&metadata)
        .assert()
        .failure()
        .stderr(contains("metadata must be a JSON object"));
}

#[test]
fn upload_without_token_reports_missing_token() {
    let env = TestEnv::new();
    let file = env.write_file("data.csv", "a,b\n");
    env.cmd()
        .args(["upload", "--deposition", "3", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("No token defined"));
}

#[test]
fn malformed_settings_file_fails() {
    let env = TestEnv::new();
    std::fs::write(&env.settings, "{not json").expect("write settings");
    env.cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(contains("invalid settings file"));
}
