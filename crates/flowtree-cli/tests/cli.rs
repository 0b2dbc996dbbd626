//! End-to-end tests running the built `flowtree` binary

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn flowtree() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_flowtree"));
    command.env_remove("RUST_LOG");
    command.env_remove("FLOWTREE_LOG_LEVEL");
    command.env_remove("FLOWTREE_LOG_FORMAT");
    command.stdin(Stdio::null());
    command
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = flowtree()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn flowtree");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for flowtree")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn entries_render_as_chain() {
    let output = flowtree()
        .args(["flow", "--entry", "Draft", "--entry", "Review", "--entry", "Publish"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("graph TD\n"));
    assert!(text.contains("f0[\"Draft\"]:::step"));
    assert!(text.contains("f0 --> f1"));
    assert!(text.contains("f1 --> f2"));
    assert!(text.ends_with('\n'));
}

#[test]
fn spec_steps_render_as_dot() {
    let output = flowtree()
        .args([
            "flow",
            "--step",
            "start -> a, b | GO",
            "--format",
            "graphviz",
            "--title",
            "Fan out",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("digraph G {"));
    assert!(text.contains("label=\"Fan out\""));
    assert!(text.contains("f0 -> f1 [label=\"GO\"];"));
    assert!(text.contains("f0 -> f2 [label=\"GO\"];"));
}

#[test]
fn mixed_sources_are_rejected() {
    let output = flowtree()
        .args(["flow", "--entry", "Draft", "--step", "a -> b"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: Conflicting input sources"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn piped_stdin_is_read() {
    let output = run_with_stdin(&["flow"], "# pipeline\na -> b\nb -> c\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("f0 --> f1"));
    assert!(text.contains("f1 --> f2"));
}

#[test]
fn empty_input_fails() {
    let output = run_with_stdin(&["flow"], "\n# nothing\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No input provided"));
}

#[test]
fn invalid_node_id_fails() {
    let output = flowtree()
        .args(["flow", "--step", "a b[Label] -> c"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid node id"));
}

#[test]
fn unsupported_format_fails() {
    let output = flowtree()
        .args(["flow", "--entry", "x", "--format", "svg"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unsupported format: svg"));
}

#[test]
fn output_file_is_written() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("flow.mmd");

    let output = flowtree()
        .args(["flow", "--entry", "Only"])
        .arg("--output")
        .arg(&target)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    let text = fs::read_to_string(&target).unwrap();
    assert!(text.contains("f0[\"Only\"]:::step"));
}

#[test]
fn tree_skips_default_excludes() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    fs::create_dir_all(project.join(".git")).unwrap();
    fs::create_dir_all(project.join("src")).unwrap();
    fs::write(project.join(".git/config"), "").unwrap();
    fs::write(project.join("src/main.rs"), "").unwrap();

    let output = flowtree().arg("tree").arg(&project).output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("\"src/\"]:::dir"));
    assert!(text.contains("\"main.rs\"]:::file"));
    assert!(!text.contains("config"));

    let output = flowtree()
        .arg("tree")
        .arg(&project)
        .arg("--no-default-excludes")
        .output()
        .unwrap();
    assert!(stdout(&output).contains("\"config\"]:::file"));
}

#[test]
fn tree_missing_root_fails() {
    let dir = tempdir().unwrap();
    let output = flowtree()
        .arg("tree")
        .arg(dir.path().join("absent"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Input file not found"));
}

#[test]
fn missing_renderer_fails() {
    let dir = tempdir().unwrap();
    let output = flowtree()
        .env("FLOWTREE_DOT", "flowtree-no-such-renderer-binary")
        .args(["flow", "--entry", "A", "--format", "dot", "--render"])
        .arg(dir.path().join("out.png"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("flowtree-no-such-renderer-binary"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn formats_json_lists_both() {
    let output = flowtree().args(["formats", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["formats"][0]["name"], "mermaid");
    assert_eq!(value["formats"][1]["name"], "dot");
}
