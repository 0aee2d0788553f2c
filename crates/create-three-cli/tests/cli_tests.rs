//! Integration tests for the create-three binary.
//!
//! Every run is non-interactive (stdin is not a terminal under the test
//! harness) and isolated from the user's configuration.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../templates")
        .canonicalize()
        .expect("bundled templates directory")
}

/// `create-three` run inside `cwd` with config lookups confined to it.
fn create_three(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("create-three").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("CREATE_THREE_TEMPLATES_DIR");
    cmd
}

fn scaffold(cwd: &Path) -> Command {
    let mut cmd = create_three(cwd);
    cmd.arg("--templates-dir").arg(templates_dir());
    cmd
}

fn package_json(root: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap()
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_scaffold_flags() {
    let temp = TempDir::new().unwrap();
    create_three(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--overwrite"))
        .stdout(predicate::str::contains("TARGET_DIR"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    create_three(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── scaffolding ───────────────────────────────────────────────────────────────

#[test]
fn scaffolds_vanilla_into_new_directory() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .args(["my-scene", "--template", "vanilla"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done🎉. Now run:"))
        .stdout(predicate::str::contains("cd my-scene"))
        .stdout(predicate::str::contains("npm install"))
        .stdout(predicate::str::contains("npm run dev"));

    let root = temp.path().join("my-scene");
    assert!(root.join("index.html").is_file());
    assert!(root.join("src/main.js").is_file());
    assert!(root.join(".gitignore").is_file());
    assert!(!root.join("_gitignore").exists());
    assert_eq!(package_json(&root)["name"], "my-scene");
}

#[test]
fn current_directory_target_skips_cd() {
    let temp = TempDir::new().unwrap();
    let cwd = temp.path().join("cool-scene");
    fs::create_dir(&cwd).unwrap();

    scaffold(&cwd)
        .args([".", "-t", "react-three-fiber"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cd ").not())
        .stdout(predicate::str::contains("npm install"));

    assert!(cwd.join("src/App.jsx").is_file());
    assert_eq!(package_json(&cwd)["name"], "cool-scene");
}

#[test]
fn target_with_spaces_is_quoted() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .args(["my scene", "-t", "vanilla", "--package-name", "my-scene"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cd \"my scene\""));

    assert_eq!(package_json(&temp.path().join("my scene"))["name"], "my-scene");
}

#[test]
fn vanilla_ts_prints_notice_and_uses_javascript() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .args(["ts-scene", "-t", "vanilla-ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ts version is currently not supported"));

    let root = temp.path().join("ts-scene");
    assert!(root.join("src/main.js").is_file());
    assert!(!root.join("tsconfig.json").exists());
}

#[test]
fn package_manager_comes_from_environment() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .env("CREATE_THREE_OUTPUT__PACKAGE_MANAGER", "pnpm")
        .args(["pm-scene", "-t", "vanilla"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm install"))
        .stdout(predicate::str::contains("pnpm run dev"));
}

#[test]
fn quiet_run_prints_nothing() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .args(["-q", "quiet-scene", "-t", "vanilla"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("quiet-scene/package.json").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .args(["preview", "-t", "react-three-fiber-ts", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("package.json"));

    assert!(!temp.path().join("preview").exists());
}

// ── failures ──────────────────────────────────────────────────────────────────

#[test]
fn unknown_template_fails_before_writing() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .args(["svelte-app", "--template", "svelte"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("svelte"))
        .stderr(predicate::str::contains("vanilla"));

    assert!(!temp.path().join("svelte-app").exists());
}

#[test]
fn missing_template_without_terminal_is_an_error() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .arg("no-template")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No template was given"));

    assert!(!temp.path().join("no-template").exists());
}

#[test]
fn non_empty_directory_needs_a_decision() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("busy");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("notes.txt"), "keep me").unwrap();

    scaffold(temp.path())
        .args(["busy", "-t", "vanilla"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not empty"));

    assert_eq!(fs::read_to_string(target.join("notes.txt")).unwrap(), "keep me");
    assert!(!target.join("package.json").exists());
}

#[test]
fn overwrite_no_cancels() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("busy");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("notes.txt"), "keep me").unwrap();

    scaffold(temp.path())
        .args(["busy", "-t", "vanilla", "--overwrite", "no"])
        .assert()
        .code(2)
        .stderr("✖ Operation cancelled\n");

    assert_eq!(fs::read_dir(&target).unwrap().count(), 1);
}

#[test]
fn overwrite_ignore_keeps_unrelated_files() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("busy");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("notes.txt"), "keep me").unwrap();

    scaffold(temp.path())
        .args(["busy", "-t", "vanilla", "--overwrite", "ignore"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(target.join("notes.txt")).unwrap(), "keep me");
    assert!(target.join("package.json").is_file());
}

#[test]
fn overwrite_yes_keeps_git() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("busy");
    fs::create_dir_all(target.join(".git")).unwrap();
    fs::write(target.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::write(target.join("notes.txt"), "old").unwrap();

    scaffold(temp.path())
        .args(["busy", "-t", "vanilla", "--overwrite", "yes"])
        .assert()
        .success();

    assert!(!target.join("notes.txt").exists());
    assert!(target.join(".git/HEAD").is_file());
    assert!(target.join("index.html").is_file());
}

#[test]
fn invalid_package_name_flag_is_rejected() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .args(["scene", "-t", "vanilla", "--package-name", "Bad Name"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Bad Name"));

    assert!(!temp.path().join("scene").exists());
}

#[test]
fn invalid_project_name_without_terminal_is_rejected() {
    let temp = TempDir::new().unwrap();

    scaffold(temp.path())
        .args(["My Scene", "-t", "vanilla"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid package.json name"));

    assert!(!temp.path().join("My Scene").exists());
}

#[test]
fn missing_templates_directory_is_not_found() {
    let temp = TempDir::new().unwrap();
    let empty = temp.path().join("no-templates");
    fs::create_dir(&empty).unwrap();

    create_three(temp.path())
        .args(["scene", "-t", "vanilla", "--templates-dir"])
        .arg(&empty)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not installed"));

    assert!(!temp.path().join("scene").exists());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    create_three(temp.path())
        .arg("--lang")
        .assert()
        .code(2);
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    create_three(temp.path())
        .args(["-c", "absent.toml", "--list"])
        .assert()
        .code(4);
}

// ── action names as targets ───────────────────────────────────────────────────

#[test]
fn action_words_are_project_names() {
    let temp = TempDir::new().unwrap();

    for name in ["list", "config", "completions", "help"] {
        scaffold(temp.path())
            .args([name, "-t", "vanilla", "--no-interactive"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("cd {name}")));

        assert_eq!(package_json(&temp.path().join(name))["name"], name);
    }
}

#[test]
fn action_flag_with_target_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    create_three(temp.path())
        .args(["my-scene", "--list"])
        .assert()
        .code(2);
    assert!(!temp.path().join("my-scene").exists());
}

// ── list / completions / config ───────────────────────────────────────────────

#[test]
fn list_json_has_every_template() {
    let temp = TempDir::new().unwrap();

    let output = create_three(temp.path())
        .args(["--list", "--format", "json", "--templates-dir"])
        .arg(templates_dir())
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["vanilla-ts", "vanilla", "react-three-fiber-ts", "react-three-fiber"]
    );
    assert!(rows.as_array().unwrap().iter().all(|r| r["available"] == true));
}

#[test]
fn list_plain_prints_identifiers() {
    let temp = TempDir::new().unwrap();

    create_three(temp.path())
        .args(["--list", "--format", "list", "--templates-dir"])
        .arg(templates_dir())
        .assert()
        .success()
        .stdout("vanilla-ts\nvanilla\nreact-three-fiber-ts\nreact-three-fiber\n");
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    create_three(temp.path())
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create-three"));
}

#[test]
fn config_init_then_get() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("create-three.toml");

    // `-c` must point at an existing file for every other action.
    create_three(temp.path())
        .args(["--config-init", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(path.is_file());

    create_three(temp.path())
        .args(["--config-get", "output.package_manager", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout("npm\n");
}

#[test]
fn config_get_unknown_key() {
    let temp = TempDir::new().unwrap();
    create_three(temp.path())
        .args(["--config-get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
