use std::fs;

use djboot::{
    ConfigOverrides, ConfigSource, NewOptions, SetupStep, StepOutcome, new_project_with_runner,
};
use tempfile::TempDir;

use crate::harness::FakeTooling;

fn blog_source() -> ConfigSource {
    ConfigSource {
        path: None,
        overrides: ConfigOverrides {
            name: Some("blog".into()),
            apps: vec!["posts".into()],
            ..Default::default()
        },
    }
}

fn seed_files(root: &std::path::Path) {
    let files = root.join("files");
    fs::create_dir_all(&files).unwrap();
    for name in ["layout", "home", "about", "posts_list", "post_page"] {
        fs::write(files.join(format!("{}_template.html", name)), format!("<!-- {} -->", name))
            .unwrap();
    }
    fs::write(files.join("style.css"), "body {}").unwrap();
}

#[test]
fn pipeline_generates_project_through_public_api() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    seed_files(root);
    fs::write(root.join("djboot.toml"), "templates = [\"layout\", \"posts_list\", \"post_page\"]\n")
        .unwrap();
    let tooling = FakeTooling::new();

    let outcome =
        new_project_with_runner(root, &blog_source(), NewOptions::default(), tooling.clone())
            .unwrap();

    assert_eq!(outcome.root, root.join("blog"));
    assert!(outcome.steps.iter().all(|r| matches!(r.outcome, StepOutcome::Completed { .. })));
    assert_eq!(
        tooling.commands().iter().map(|c| c.split(' ').next().unwrap()).collect::<Vec<_>>(),
        ["python3", "pip", "django-admin", "python"]
    );

    let project = root.join("blog");
    assert_eq!(
        fs::read_to_string(project.join("templates/posts/post_page.html")).unwrap(),
        "<!-- post_page -->"
    );
    assert!(!project.join("templates/home.html").exists());
    assert_eq!(fs::read_to_string(project.join("static/style.css")).unwrap(), "body {}");

    let views = fs::read_to_string(project.join("posts/views.py")).unwrap();
    assert!(views.contains("posts/posts_list.html"));
    assert!(views.contains("posts/post_page.html"));

    let settings = fs::read_to_string(project.join("core/settings.py")).unwrap();
    assert!(settings.contains("    'posts',"));
    assert!(settings.contains("'DIRS': ['templates'],"));
}

#[test]
fn pipeline_rerun_converges() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    seed_files(root);
    let tooling = FakeTooling::new();

    new_project_with_runner(root, &blog_source(), NewOptions::default(), tooling.clone()).unwrap();
    let settings = fs::read_to_string(root.join("blog/core/settings.py")).unwrap();
    let commands = tooling.commands().len();

    let outcome =
        new_project_with_runner(root, &blog_source(), NewOptions::default(), tooling.clone())
            .unwrap();

    assert_eq!(tooling.commands().len(), commands);
    assert_eq!(fs::read_to_string(root.join("blog/core/settings.py")).unwrap(), settings);
    let skipped: Vec<SetupStep> = outcome
        .steps
        .iter()
        .filter(|r| matches!(r.outcome, StepOutcome::Skipped { .. }))
        .map(|r| r.step)
        .collect();
    assert_eq!(skipped.len(), outcome.steps.len());
}

#[test]
fn invalid_override_fails_before_any_command() {
    let temp = TempDir::new().unwrap();
    let tooling = FakeTooling::new();
    let source = ConfigSource {
        path: None,
        overrides: ConfigOverrides { apps: vec!["not valid".into()], ..Default::default() },
    };

    let err = new_project_with_runner(temp.path(), &source, NewOptions::default(), tooling.clone())
        .unwrap_err();

    assert!(err.to_string().contains("Invalid module name"));
    assert!(tooling.commands().is_empty());
}
