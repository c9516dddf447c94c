use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn new_rejects_invalid_app_name_before_running_anything() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "blog", "--app", "my-app"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid module name 'my-app'"));

    assert!(!ctx.work_dir().join("blog").exists());
}

#[test]
fn new_rejects_nested_project_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name must be a single directory or file name"));
}

#[test]
fn new_requires_explicit_config_to_exist() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn version_flag_prints_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
