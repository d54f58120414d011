use pipecore::{Executor, RunError, Settings, Workflow};
use std::path::{Path, PathBuf};

/// Launch invocation produced by the command builder
#[derive(Debug, Clone)]
pub struct BuiltCommand {
    /// Program to execute
    pub program: String,
    /// Arguments after the program
    pub args: Vec<String>,
    /// Run name unique per (workflow id, attempts)
    pub run_name: String,
    /// Generated run script, local backend only
    pub script: Option<PathBuf>,
}

impl BuiltCommand {
    /// Full argument vector including the program itself
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

/// Build the backend-specific launch invocation for one workflow run
///
/// Argument construction is a pure function of the inputs; the only side
/// effect is (re)writing the run script for the local backend. The script
/// is byte-identical across repeated builds with the same attempts value.
pub fn build_command(
    workflow: &Workflow,
    work_dir: &Path,
    settings: &Settings,
    resume: bool,
) -> Result<BuiltCommand, RunError> {
    let run_name = workflow.run_name();
    let log_path = workflow.output_dir.join("nextflow.log");

    let argv = match settings.executor {
        Executor::Kubernetes => kuberun_argv(workflow, &run_name, &log_path, settings),
        Executor::Local => local_argv(workflow, &run_name, &log_path, resume),
    };

    let script = match settings.executor {
        Executor::Kubernetes => None,
        Executor::Local => Some(write_run_script(work_dir, &run_name, &argv)?),
    };

    let mut args = argv;
    let program = args.remove(0);

    Ok(BuiltCommand {
        program,
        args,
        run_name,
        script,
    })
}

fn kuberun_argv(
    workflow: &Workflow,
    run_name: &str,
    log_path: &Path,
    settings: &Settings,
) -> Vec<String> {
    vec![
        "nextflow".into(),
        "-config".into(),
        "nextflow.config".into(),
        "-log".into(),
        log_path.to_string_lossy().into_owned(),
        "kuberun".into(),
        workflow.pipeline.clone(),
        "-ansi-log".into(),
        "false".into(),
        "-latest".into(),
        "1".into(),
        "-name".into(),
        run_name.to_string(),
        "-profile".into(),
        workflow.profiles.clone(),
        "-revision".into(),
        workflow.revision.clone(),
        "-volume-mount".into(),
        settings.pvc_name.clone(),
    ]
}

fn local_argv(workflow: &Workflow, run_name: &str, log_path: &Path, resume: bool) -> Vec<String> {
    let mut argv = vec![
        "srun".into(),
        "nextflow".into(),
        "-config".into(),
        "nextflow.config".into(),
        "-log".into(),
        log_path.to_string_lossy().into_owned(),
        "run".into(),
        workflow.pipeline.clone(),
        "-ansi-log".into(),
        "false".into(),
        "-latest".into(),
        "1".into(),
        "-with-report".into(),
        "results/report.html".into(),
        "-with-trace".into(),
        "results/trace.txt".into(),
        "-name".into(),
        run_name.to_string(),
        "-profile".into(),
        workflow.profiles.clone(),
        "-revision".into(),
        workflow.revision.clone(),
    ];

    // include-or-omit: an empty placeholder must never land in the argv
    if workflow.with_container {
        argv.push("-with-docker".into());
    }
    if resume {
        argv.push("-resume".into());
    }

    argv
}

/// Write `<work_dir>/<run_name>.sh` so the run can be handed to a batch
/// scheduler (e.g. via sbatch) out-of-band. Overwrites any stale script.
fn write_run_script(work_dir: &Path, run_name: &str, argv: &[String]) -> Result<PathBuf, RunError> {
    let path = work_dir.join(format!("{}.sh", run_name));
    let content = format!("#!/bin/bash\n{}\n", argv.join(" "));
    std::fs::write(&path, content)?;
    Ok(path)
}
