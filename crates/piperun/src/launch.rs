use crate::BuiltCommand;
use pipecore::RunError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::{Child, Command};

/// Name of the combined stdout/stderr log written into the work dir
pub const RUN_LOG: &str = ".workflow.log";

/// Handle to a launched workflow process
///
/// Owned exclusively by the run supervisor for the lifetime of the run.
pub struct RunHandle {
    pid: u32,
    child: Child,
    log_path: PathBuf,
}

impl RunHandle {
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Combined stdout/stderr log of the process
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Block until the process terminates and return its exit status
    pub async fn wait(&mut self) -> Result<std::process::ExitStatus, RunError> {
        Ok(self.child.wait().await?)
    }
}

/// Seam for starting the pipeline runner process
pub trait Launcher: Send + Sync {
    fn launch(&self, command: &BuiltCommand, work_dir: &Path) -> Result<RunHandle, RunError>;
}

/// Launches the built command as a detached child process
///
/// The child runs with `work_dir` as its working directory, passed
/// explicitly per spawn rather than by mutating the process-wide current
/// directory, so concurrent supervisors never interfere with each other.
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &BuiltCommand, work_dir: &Path) -> Result<RunHandle, RunError> {
        let log_path = work_dir.join(RUN_LOG);

        // overwritten each run
        let stdout = std::fs::File::create(&log_path)?;
        let stderr = stdout.try_clone()?;

        let child = Command::new(&command.program)
            .args(&command.args)
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .spawn()
            .map_err(RunError::Launch)?;

        let pid = child
            .id()
            .ok_or_else(|| RunError::Launch(std::io::Error::other("process exited before its pid could be read")))?;

        Ok(RunHandle {
            pid,
            child,
            log_path,
        })
    }
}
