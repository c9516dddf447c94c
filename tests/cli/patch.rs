use crate::harness::{DJANGO_SETTINGS, TestContext};
use predicates::prelude::*;

#[test]
fn patch_rewrites_generated_settings() {
    let ctx = TestContext::new();
    ctx.write_settings("core/settings.py");

    ctx.cli()
        .args(["patch", "core/settings.py", "--config", "djboot.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));

    ctx.write(
        "djboot.toml",
        "allowed_hosts = [\"localhost\", \"127.0.0.1\"]\n\n[[apps]]\nname = \"posts\"\n",
    );
    ctx.cli()
        .args(["patch", "core/settings.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Patched core/settings.py"))
        .stdout(predicate::str::contains("ensure_installed_module: 1 line(s)"));

    let patched = ctx.read("core/settings.py");
    assert!(patched.contains("ALLOWED_HOSTS = ['localhost', '127.0.0.1']"));
    assert!(patched.contains("        'DIRS': ['templates'],"));
    assert!(patched.contains("INSTALLED_APPS = [\n    'posts',\n"));
    assert!(patched.contains("import os\nfrom pathlib import Path\n"));
    assert!(patched.ends_with("STATICFILES_DIRS = [\n    os.path.join(BASE_DIR, 'static')\n]\n"));
}

#[test]
fn second_patch_reports_up_to_date() {
    let ctx = TestContext::new();
    ctx.write_settings("settings.py");

    ctx.cli().args(["patch", "settings.py"]).assert().success();
    let once = ctx.read("settings.py");

    ctx.cli()
        .args(["patch", "settings.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
    assert_eq!(ctx.read("settings.py"), once);
}

#[test]
fn missing_marker_is_a_warning() {
    let ctx = TestContext::new();
    ctx.write("settings.py", "DEBUG = True\n");

    ctx.cli()
        .args(["patch", "settings.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "⚠️  set_allowed_hosts: marker 'ALLOWED_HOSTS' not found",
        ))
        .stderr(predicate::str::contains("marker not found"));

    assert!(ctx.read("settings.py").starts_with("import os\nDEBUG = True\n"));
}

#[test]
fn strict_patch_fails_without_writing() {
    let ctx = TestContext::new();
    ctx.write("settings.py", "DEBUG = True\n");

    ctx.cli()
        .args(["patch", "settings.py", "--strict"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Marker 'ALLOWED_HOSTS' not found"));

    assert_eq!(ctx.read("settings.py"), "DEBUG = True\n");
}

#[test]
fn missing_settings_file_exits_with_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["patch", "core/settings.py"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Settings file not found"))
        .stderr(predicate::str::contains("settings.py"));
}

#[test]
fn json_report_lists_every_rule() {
    let ctx = TestContext::new();
    ctx.write_settings("settings.py");

    let output = ctx
        .cli()
        .args(["patch", "settings.py", "--format", "json"])
        .output()
        .expect("failed to run djboot");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rules: Vec<&str> = report["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["rule"].as_str().unwrap())
        .collect();
    assert_eq!(
        rules,
        ["ensure_import", "set_allowed_hosts", "set_template_dirs", "ensure_static_dirs"]
    );
    assert_eq!(report["entries"][0]["outcome"], "applied");
    assert_eq!(report["entries"][3]["lines"], 4);
}

#[test]
fn settings_outside_work_dir_can_be_patched() {
    let ctx = TestContext::new();
    let settings = ctx.outside_dir().join("settings.py");
    std::fs::write(&settings, DJANGO_SETTINGS).unwrap();

    ctx.cli().arg("patch").arg(&settings).assert().success();

    let patched = std::fs::read_to_string(&settings).unwrap();
    assert!(patched.contains("ALLOWED_HOSTS = ['127.0.0.1']"));
}

#[test]
fn configured_patch_rules_extend_the_plan() {
    let ctx = TestContext::new();
    ctx.write_settings("settings.py");
    ctx.write(
        "djboot.toml",
        "[[patch.rules]]\nrule = \"append_installed_module\"\nmodule = \"rest_framework\"\n",
    );

    ctx.cli()
        .args(["patch", "settings.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("append_installed_module: 1 line(s)"));

    assert!(ctx.read("settings.py").contains("INSTALLED_APPS = [\n    'rest_framework',\n"));
}
