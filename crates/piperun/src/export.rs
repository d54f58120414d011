use async_trait::async_trait;
use pipecore::RunError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Result of an output export run
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub exit_code: i32,
    /// Combined stdout/stderr of the export process
    pub output: String,
}

impl ExportOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Seam for exporting a finished run's output directory to durable storage
#[async_trait]
pub trait Exporter: Send + Sync {
    async fn export(&self, workflow_id: &str, output_dir: &Path) -> Result<ExportOutcome, RunError>;
}

/// Runs the configured export script as `<script> <id> <output_dir>`
pub struct ScriptExporter {
    script: PathBuf,
}

impl ScriptExporter {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

#[async_trait]
impl Exporter for ScriptExporter {
    async fn export(&self, workflow_id: &str, output_dir: &Path) -> Result<ExportOutcome, RunError> {
        let mut child = Command::new(&self.script)
            .arg(workflow_id)
            .arg(output_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(RunError::Launch)?;

        let mut stdout_data = Vec::new();
        let mut stderr_data = Vec::new();

        if let Some(mut stdout) = child.stdout.take() {
            stdout.read_to_end(&mut stdout_data).await?;
        }
        if let Some(mut stderr) = child.stderr.take() {
            stderr.read_to_end(&mut stderr_data).await?;
        }

        let status = child.wait().await?;

        let mut output = String::from_utf8_lossy(&stdout_data).into_owned();
        output.push_str(&String::from_utf8_lossy(&stderr_data));

        Ok(ExportOutcome {
            exit_code: status.code().unwrap_or(-1),
            output,
        })
    }
}
