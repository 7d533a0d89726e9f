//! End-to-end tests driving the `create-app` binary
//!
//! Every run gets a fresh working directory and an empty, non-terminal stdin,
//! so any prompt the run reaches is reported and ends it as cancelled.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::process::Output;

const PROJECT_NAME: &str = "test-project";

fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

fn create_app(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("create-app").unwrap();
    cmd.current_dir(cwd)
        .env("CREATE_APP_TEMPLATES_DIR", templates_dir())
        .env("NO_COLOR", "1")
        .write_stdin("");
    cmd
}

/// stdout and stderr together; prompts and logs go to stderr
fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn package_name(project_dir: &Path) -> String {
    let content = std::fs::read_to_string(project_dir.join("package.json")).unwrap();
    let pkg: serde_json::Value = serde_json::from_str(&content).unwrap();
    pkg["name"].as_str().unwrap().to_string()
}

#[test]
fn returns_cli_version() {
    let tmp = tempfile::tempdir().unwrap();
    let expected = format!("v{}", env!("CARGO_PKG_VERSION"));

    for flag in ["--version", "-v"] {
        create_app(tmp.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicates::str::contains(expected.as_str()));
    }
}

#[test]
fn returns_usage() {
    let tmp = tempfile::tempdir().unwrap();

    for flag in ["--help", "-h"] {
        create_app(tmp.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicates::str::contains("Usage: create-app"));
    }
}

#[test]
fn prompts_for_project_name_if_not_provided() {
    let tmp = tempfile::tempdir().unwrap();
    let output = create_app(tmp.path()).output().unwrap();

    assert!(output.status.success());
    let text = combined(&output);
    assert!(
        text.contains(&format!("Create App v{}", env!("CARGO_PKG_VERSION"))),
        "{text}"
    );
    assert!(text.contains("Your project name:"), "{text}");
    assert!(text.contains("Operation cancelled!"), "{text}");
}

#[test]
fn prompts_for_template_if_not_provided() {
    let tmp = tempfile::tempdir().unwrap();

    for flag in ["--project-name", "-p"] {
        let output = create_app(tmp.path())
            .args([flag, PROJECT_NAME])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(combined(&output).contains("Select template:"));
        assert!(!tmp.path().join(PROJECT_NAME).exists());
    }
}

#[test]
fn rejects_invalid_template() {
    let tmp = tempfile::tempdir().unwrap();
    let output = create_app(tmp.path())
        .args(["-p", PROJECT_NAME, "-t", "unknown"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let text = combined(&output);
    assert!(text.contains("'unknown' isn't a valid template."), "{text}");
    assert!(text.contains("node-ts"), "{text}");
    assert!(!tmp.path().join(PROJECT_NAME).exists());
}

#[test]
fn scaffolds_project_and_asks_to_install() {
    let tmp = tempfile::tempdir().unwrap();
    let output = create_app(tmp.path())
        .args(["-p", PROJECT_NAME, "-t", "node"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(combined(&output).contains("Installing dependencies now?"));
    assert_eq!(package_name(&tmp.path().join(PROJECT_NAME)), PROJECT_NAME);
}

#[test]
fn scaffolds_project_on_skipping_install() {
    let tmp = tempfile::tempdir().unwrap();
    let output = create_app(tmp.path())
        .args(["-p", PROJECT_NAME, "-t", "node", "-s"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = combined(&output);
    assert!(text.contains("done."), "{text}");
    assert!(!text.contains("Installing dependencies now?"), "{text}");

    let project = tmp.path().join(PROJECT_NAME);
    assert_eq!(package_name(&project), PROJECT_NAME);
    assert!(project.join(".gitignore").is_file());
    assert!(!project.join("_gitignore").exists());
    assert!(project.join("src/index.js").is_file());
    assert!(!project.join("node_modules").exists());
}

#[test]
fn nested_project_path_uses_last_component_as_name() {
    let tmp = tempfile::tempdir().unwrap();
    create_app(tmp.path())
        .args(["--project-name", "apps/web-app", "--template", "node-ts", "--skip-install"])
        .assert()
        .success();

    let project = tmp.path().join("apps/web-app");
    assert_eq!(package_name(&project), "web-app");
    assert!(project.join("tsconfig.json").is_file());
}

#[test]
fn scaffolding_twice_into_same_folder_succeeds() {
    let tmp = tempfile::tempdir().unwrap();

    for _ in 0..2 {
        create_app(tmp.path())
            .args(["-p", PROJECT_NAME, "-t", "node", "-s"])
            .assert()
            .success();
    }
    assert_eq!(package_name(&tmp.path().join(PROJECT_NAME)), PROJECT_NAME);
}

#[test]
fn invalid_project_name_falls_back_to_prompt() {
    let tmp = tempfile::tempdir().unwrap();
    let output = create_app(tmp.path())
        .args(["-p", "Bad-Name", "-t", "node", "-s"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = combined(&output);
    assert!(text.contains("'Bad-Name' isn't a valid project name."), "{text}");
    assert!(text.contains("Your project name:"), "{text}");
    assert!(!tmp.path().join("Bad-Name").exists());
}

#[test]
fn invalid_package_manager_falls_back_to_prompt() {
    let tmp = tempfile::tempdir().unwrap();

    for flag in ["--package-manager", "-m", "-pm"] {
        let output = create_app(tmp.path())
            .args(["-p", PROJECT_NAME, "-t", "node", flag, "unknown"])
            .output()
            .unwrap();

        assert!(output.status.success(), "{flag}");
        let text = combined(&output);
        assert!(text.contains("'unknown' isn't a valid package manager."), "{text}");
        assert!(text.contains("Installing dependencies now?"), "{text}");
    }
}

#[test]
fn package_manager_flag_is_checked_before_prompts() {
    let tmp = tempfile::tempdir().unwrap();
    let output = create_app(tmp.path())
        .args(["--package-manager", "unknown"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = combined(&output);
    let reported = text
        .find("'unknown' isn't a valid package manager.")
        .unwrap_or_else(|| panic!("{text}"));
    let prompted = text.find("Your project name:").unwrap_or_else(|| panic!("{text}"));
    assert!(reported < prompted, "{text}");
}

#[test]
fn unreadable_templates_dir_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let output = create_app(tmp.path())
        .args(["-p", PROJECT_NAME, "-t", "node", "--template-dir"])
        .arg(tmp.path().join("no-templates-here"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(combined(&output).contains("Loading templates failed!"));
}

#[cfg(unix)]
mod fake_package_managers {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Put an executable `name` script into `bin`
    fn fake_program(bin: &Path, name: &str, script: &str) {
        let path = bin.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn installs_dependencies_with_selected_package_manager() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        fake_program(
            bin.path(),
            "npm",
            r#"if [ "$1" = "--version" ]; then echo 10.0.0; exit 0; fi
if [ "$1" = "install" ]; then echo added 0 packages; : > package-lock.json; exit 0; fi
exit 1"#,
        );

        let output = create_app(tmp.path())
            .env("PATH", bin.path())
            .args(["-p", PROJECT_NAME, "-t", "node", "-m", "npm"])
            .output()
            .unwrap();

        let text = combined(&output);
        assert!(output.status.success(), "{text}");
        assert!(text.contains("added 0 packages"), "{text}");
        assert!(text.contains("done."), "{text}");
        assert!(tmp.path().join(PROJECT_NAME).join("package-lock.json").is_file());
    }

    #[test]
    fn non_utf8_version_output_still_installs() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        fake_program(
            bin.path(),
            "yarn",
            r#"if [ "$1" = "--version" ]; then printf '1.22\377\n'; exit 0; fi
if [ "$1" = "install" ]; then : > yarn.lock; exit 0; fi
exit 1"#,
        );

        let output = create_app(tmp.path())
            .env("PATH", bin.path())
            .args(["-p", PROJECT_NAME, "-t", "node", "-m", "yarn"])
            .output()
            .unwrap();

        let text = combined(&output);
        assert!(output.status.success(), "{text}");
        assert!(!text.contains("You haven't installed"), "{text}");
        assert!(tmp.path().join(PROJECT_NAME).join("yarn.lock").is_file());
    }

    #[test]
    fn failed_install_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        fake_program(
            bin.path(),
            "pnpm",
            r#"if [ "$1" = "--version" ]; then echo 9.0.0; exit 0; fi
echo "ERR_PNPM_FETCH_404" >&2
exit 7"#,
        );

        let output = create_app(tmp.path())
            .env("PATH", bin.path())
            .args(["-p", PROJECT_NAME, "-t", "node", "-m", "pnpm"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let text = combined(&output);
        assert!(text.contains("Installing dependencies failed!"), "{text}");
        assert!(text.contains("exited with code 7"), "{text}");
        // The scaffolded files stay behind
        assert_eq!(package_name(&tmp.path().join(PROJECT_NAME)), PROJECT_NAME);
    }

    #[test]
    fn missing_package_manager_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let empty_bin = tempfile::tempdir().unwrap();

        let output = create_app(tmp.path())
            .env("PATH", empty_bin.path())
            .args(["-p", PROJECT_NAME, "-t", "node", "-m", "bun"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let text = combined(&output);
        assert!(
            text.contains("You haven't installed the bun package manager!"),
            "{text}"
        );
    }
}
