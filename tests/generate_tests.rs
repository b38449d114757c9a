//! End-to-end tests for the generate command

mod common;

use common::{TestWorkspace, envforge_cmd};
use predicates::prelude::*;

const TEMPLATE: &str = "# Database\nURL=<supabase-url>\nKEY=<supabase-anon-key>\nPORT=3000\n";

#[test]
fn test_generate_with_user_values() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", TEMPLATE);

    envforge_cmd()
        .current_dir(&workspace.path)
        .args([
            "generate",
            "--values",
            "supabase-url=http://localhost:54321,SUPABASE_ANON_KEY=anon",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote .env.local"))
        .stdout(predicate::str::contains("Generated 1 file(s)"));

    assert_eq!(
        workspace.read_file(".env.local"),
        "# Database\nURL=http://localhost:54321\nKEY=anon\nPORT=3000\n"
    );
}

#[test]
fn test_generate_without_sources_keeps_placeholders() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", TEMPLATE);

    envforge_cmd()
        .current_dir(&workspace.path)
        .arg("generate")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"));

    assert_eq!(workspace.read_file(".env.local"), TEMPLATE);
}

#[test]
fn test_generate_explicit_directory() {
    let workspace = TestWorkspace::new();
    workspace.write_file("project/.env.template", "PORT=3000");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "project"])
        .assert()
        .success();

    assert_eq!(workspace.read_file("project/.env.local"), "PORT=3000");
}

#[test]
fn test_generate_nested_templates_and_ignored_dirs() {
    let workspace = TestWorkspace::new();
    workspace.write_file("apps/web/.env.template", "A=1");
    workspace.write_file("apps/api/.env.template", "B=2");
    workspace.write_file("node_modules/pkg/.env.template", "C=3");
    workspace.write_file("fixtures/.env.template", "D=4");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--ignore", "fixtures"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 file(s)"));

    assert_eq!(workspace.read_file("apps/web/.env.local"), "A=1");
    assert_eq!(workspace.read_file("apps/api/.env.local"), "B=2");
    assert!(!workspace.file_exists("node_modules/pkg/.env.local"));
    assert!(!workspace.file_exists("fixtures/.env.local"));
}

#[test]
fn test_generate_merge_keeps_local_values() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "PORT=3000\nNEW=1\n");
    workspace.write_file(".env.local", "# mine\nPORT=9999\nSECRET=s\n");

    envforge_cmd()
        .current_dir(&workspace.path)
        .arg("generate")
        .assert()
        .success();

    assert_eq!(
        workspace.read_file(".env.local"),
        "# mine\nPORT=9999\nSECRET=s\nNEW=1\n"
    );
}

#[test]
fn test_generate_override_replaces_local_values() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "PORT=3000");
    workspace.write_file(".env.local", "PORT=9999\nSECRET=s");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--override"])
        .assert()
        .success();

    assert_eq!(workspace.read_file(".env.local"), "PORT=3000\nSECRET=s");
}

#[test]
fn test_generate_no_merge_replaces_file() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "PORT=3000");
    workspace.write_file(".env.local", "PORT=9999\nSECRET=s");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--no-merge"])
        .assert()
        .success();

    assert_eq!(workspace.read_file(".env.local"), "PORT=3000");
}

#[test]
fn test_generate_extra_variables() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "PORT=3000");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--vars", "DEBUG=true,LOG_LEVEL=info"])
        .assert()
        .success();

    assert_eq!(
        workspace.read_file(".env.local"),
        "PORT=3000\n\n# Extra variables\nDEBUG=true\nLOG_LEVEL=info"
    );
}

#[test]
fn test_generate_custom_output() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "PORT=3000");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "-o", ".env"])
        .assert()
        .success();

    assert_eq!(workspace.read_file(".env"), "PORT=3000");
    assert!(!workspace.file_exists(".env.local"));
}

#[test]
fn test_generate_project_config() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "URL=<supabase-url>");
    workspace.write_file(
        ".envforge.yaml",
        "output: .env.dev\nvalues:\n  - supabase-url=http://from-config\nvariables:\n  - DEBUG=true\n",
    );

    envforge_cmd()
        .current_dir(&workspace.path)
        .arg("generate")
        .assert()
        .success();

    assert_eq!(
        workspace.read_file(".env.dev"),
        "URL=http://from-config\n\n# Extra variables\nDEBUG=true"
    );
}

#[test]
fn test_generate_invalid_values_fails_before_writing() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "PORT=3000");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--values", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value entry 'novalue'"));

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--values", "db.url=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid placeholder name"));

    assert!(!workspace.file_exists(".env.local"));
}

#[test]
fn test_generate_missing_directory_fails() {
    let workspace = TestWorkspace::new();

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_generate_no_templates() {
    let workspace = TestWorkspace::new();

    envforge_cmd()
        .current_dir(&workspace.path)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("No .env.template files found"));
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "PORT=3000");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--dry-run", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN] Would create .env.local"))
        .stdout(predicate::str::contains("PORT=3000"));

    assert!(!workspace.file_exists(".env.local"));
}

#[test]
fn test_generate_dry_run_leaves_existing_file() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "PORT=3000");
    workspace.write_file(".env.local", "PORT=9999");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--dry-run", "--override"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN] Would update .env.local"));

    assert_eq!(workspace.read_file(".env.local"), "PORT=9999");
}

#[test]
fn test_generate_silent() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "URL=<supabase-url>");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--silent"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(workspace.file_exists(".env.local"));
}

#[test]
fn test_generate_silent_failure_prints_nothing() {
    let workspace = TestWorkspace::new();

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "-s", "--vars", "=x"])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_generate_verbose_reports_unresolved() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", "A=<custom-thing>");

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<custom-thing> has no value"));

    assert_eq!(workspace.read_file(".env.local"), "A=<custom-thing>");
}

#[cfg(unix)]
#[test]
fn test_generate_with_status_command() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".env.template", TEMPLATE);
    let script = workspace.write_status_script(
        r#"{"API_URL": "http://127.0.0.1:54321", "ANON_KEY": "anon-from-status"}"#,
    );

    envforge_cmd()
        .current_dir(&workspace.path)
        .args(["generate", "--values", "supabase-anon-key=mine"])
        .env("ENVFORGE_STATUS_COMMAND", &script)
        .assert()
        .success();

    assert_eq!(
        workspace.read_file(".env.local"),
        "# Database\nURL=http://127.0.0.1:54321\nKEY=mine\nPORT=3000\n"
    );
}
