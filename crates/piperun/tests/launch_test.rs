use piperun::{BuiltCommand, ExportOutcome, Exporter, Launcher, ProcessLauncher, ScriptExporter};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

fn shell_command(script: &str) -> BuiltCommand {
    BuiltCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        run_name: "workflow-test-0001".to_string(),
        script: None,
    }
}

fn write_executable(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

#[tokio::test]
async fn test_launch_redirects_combined_output_to_log() {
    let work_dir = tempfile::tempdir().unwrap();
    let command = shell_command("echo out; echo err >&2");

    let mut handle = ProcessLauncher.launch(&command, work_dir.path()).unwrap();
    assert!(handle.pid() > 0);

    let status = handle.wait().await.unwrap();
    assert!(status.success());

    let log = std::fs::read_to_string(handle.log_path()).unwrap();
    assert!(log.contains("out"));
    assert!(log.contains("err"));
    assert_eq!(handle.log_path(), work_dir.path().join(".workflow.log"));
}

#[tokio::test]
async fn test_launch_overwrites_previous_log() {
    let work_dir = tempfile::tempdir().unwrap();

    let mut first = ProcessLauncher
        .launch(&shell_command("echo first-run"), work_dir.path())
        .unwrap();
    first.wait().await.unwrap();

    let mut second = ProcessLauncher
        .launch(&shell_command("echo second-run"), work_dir.path())
        .unwrap();
    second.wait().await.unwrap();

    let log = std::fs::read_to_string(work_dir.path().join(".workflow.log")).unwrap();
    assert!(log.contains("second-run"));
    assert!(!log.contains("first-run"));
}

#[tokio::test]
async fn test_launch_reports_nonzero_exit() {
    let work_dir = tempfile::tempdir().unwrap();

    let mut handle = ProcessLauncher
        .launch(&shell_command("exit 7"), work_dir.path())
        .unwrap();

    let status = handle.wait().await.unwrap();
    assert!(!status.success());
    assert_eq!(status.code(), Some(7));
}

#[tokio::test]
async fn test_script_exporter_passes_id_and_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("save.sh");
    write_executable(&script, "#!/bin/sh\necho \"saving $1 from $2\"\n");

    let outcome = ScriptExporter::new(&script)
        .export("abc123", &dir.path().join("output"))
        .await
        .unwrap();

    assert!(outcome.success());
    assert!(outcome.output.contains("saving abc123 from"));
    assert!(outcome.output.contains("output"));
}

#[tokio::test]
async fn test_script_exporter_captures_failure() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("save.sh");
    write_executable(&script, "#!/bin/sh\necho \"no space left\" >&2\nexit 3\n");

    let outcome = ScriptExporter::new(&script)
        .export("abc123", dir.path())
        .await
        .unwrap();

    assert!(!outcome.success());
    assert_eq!(outcome.exit_code, 3);
    assert!(outcome.output.contains("no space left"));
}

#[test]
fn test_export_outcome_success() {
    let ok = ExportOutcome {
        exit_code: 0,
        output: String::new(),
    };
    let bad = ExportOutcome {
        exit_code: 1,
        output: String::new(),
    };
    assert!(ok.success());
    assert!(!bad.success());
}
