use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn steps_lists_default_plan() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. create directories (my_project)"))
        .stdout(predicate::str::contains("pip install django"))
        .stdout(predicate::str::contains("start apps").not())
        .stdout(predicate::str::contains("run migrations").not());
}

#[test]
fn steps_follow_configuration_file() {
    let ctx = TestContext::new();
    ctx.write("djboot.toml", "name = \"blog\"\nmigrate = true\n\n[[apps]]\nname = \"posts\"\n");

    ctx.cli()
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. create directories (blog)"))
        .stdout(predicate::str::contains("5. start apps (posts)"))
        .stdout(predicate::str::contains("11. run migrations"));
}

#[test]
fn invalid_configuration_is_rejected() {
    let ctx = TestContext::new();
    ctx.write("djboot.toml", "unknown_key = 1\n");

    ctx.cli()
        .arg("steps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: TOML parse error"));
}
