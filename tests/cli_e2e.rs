use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mokujin"))
}

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    bin()
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("run mokujin")
}

/// The documented scenario: two templates and a sub-directory that must be ignored
#[test]
fn e2e_generate_copies_top_level_templates() {
    let temp_dir = TempDir::new().expect("temp dir");
    let templates = temp_dir.path().join("templates");
    fs::create_dir_all(templates.join("extra")).expect("mkdir templates/extra");
    fs::write(templates.join("README.md"), "A").expect("write README");
    fs::write(templates.join("Base de données.md"), "B").expect("write db");
    fs::write(templates.join("extra/ignored.md"), "C").expect("write ignored");

    let output = run_in(&temp_dir, &["generate"]);
    assert!(output.status.success(), "{:?}", output);

    let doc = temp_dir.path().join("documentation");
    assert_eq!(fs::read_to_string(doc.join("README.md")).expect("read"), "A");
    assert_eq!(
        fs::read_to_string(doc.join("Base de données.md")).expect("read"),
        "B"
    );
    assert!(!doc.join("extra").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("📁"), "Got:\n{}", stdout);
    assert!(stdout.contains("✓ README.md copied"), "Got:\n{}", stdout);
    assert!(stdout.contains("✓ Base de données.md copied"), "Got:\n{}", stdout);
    assert!(
        stdout.trim_end().ends_with("✅ Documentation generated successfully!"),
        "Got:\n{}",
        stdout
    );
}

#[test]
fn e2e_generate_rerun_overwrites() {
    let temp_dir = TempDir::new().expect("temp dir");
    let templates = temp_dir.path().join("templates");
    fs::create_dir_all(&templates).expect("mkdir templates");
    fs::write(templates.join("README.md"), "template").expect("write");

    assert!(run_in(&temp_dir, &["generate"]).status.success());

    let readme = temp_dir.path().join("documentation/README.md");
    fs::write(&readme, "edited by hand, longer than the template").expect("edit");

    assert!(run_in(&temp_dir, &["generate"]).status.success());
    assert_eq!(fs::read_to_string(&readme).expect("read"), "template");
}

#[test]
fn e2e_generate_without_templates_fails() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = run_in(&temp_dir, &["generate"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌"), "Got:\n{}", stderr);
    assert!(stderr.contains("templates directory not found"), "Got:\n{}", stderr);
    assert_eq!(stderr.matches("Searched in:").count(), 2, "Got:\n{}", stderr);
    assert!(!temp_dir.path().join("documentation").exists());
}

#[test]
fn e2e_generate_with_documentation_file_in_the_way() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(temp_dir.path().join("templates")).expect("mkdir templates");
    fs::write(temp_dir.path().join("templates/README.md"), "A").expect("write");
    fs::write(temp_dir.path().join("documentation"), "not a dir").expect("write");

    let output = run_in(&temp_dir, &["generate"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot create"), "Got:\n{}", stderr);
}

#[test]
fn e2e_version_prints_one_line() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = run_in(&temp_dir, &["version"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Mokujin version 1.0.0 !\n"
    );
    assert!(fs::read_dir(temp_dir.path()).expect("ls").next().is_none());
}

#[test]
fn e2e_no_arguments_prints_help() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = run_in(&temp_dir, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("generate"), "Got:\n{}", stdout);
    assert!(stdout.contains("version"), "Got:\n{}", stdout);
}

#[test]
fn e2e_unknown_command_is_usage_error() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = run_in(&temp_dir, &["publish"]);

    assert!(!output.status.success());
}
