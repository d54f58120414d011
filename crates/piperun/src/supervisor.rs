use crate::{build_command, Exporter, Launcher, ProcessLauncher, ScriptExporter, StateRecorder};
use pipecore::{Datastore, RunError, Settings, Workflow, WorkflowStatus};
use std::sync::Arc;

/// Supervises one workflow attempt end-to-end
///
/// build -> launch -> checkpoint pid -> wait -> record status -> export.
/// The steps are strictly sequential; the pid checkpoint is awaited
/// before the wait begins so an observer reading the datastore can always
/// find a pid for a run that has truly started. Once launched a run
/// cannot be cancelled through this component.
pub struct RunSupervisor {
    db: Arc<dyn Datastore>,
    launcher: Arc<dyn Launcher>,
    exporter: Arc<dyn Exporter>,
    settings: Settings,
}

impl RunSupervisor {
    pub fn new(db: Arc<dyn Datastore>, settings: Settings) -> Self {
        let exporter = Arc::new(ScriptExporter::new(settings.save_script.clone()));
        Self {
            db,
            launcher: Arc::new(ProcessLauncher),
            exporter,
            settings,
        }
    }

    pub fn with_launcher(mut self, launcher: Arc<dyn Launcher>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn with_exporter(mut self, exporter: Arc<dyn Exporter>) -> Self {
        self.exporter = exporter;
        self
    }

    /// Launch the workflow and supervise it to completion
    ///
    /// Failures before the pid checkpoint leave the descriptor untouched
    /// for an external retrier. A non-zero pipeline exit is not an error;
    /// it is the `failed` status. Export failure is logged and never
    /// alters the recorded status.
    pub async fn launch(
        &self,
        workflow: &mut Workflow,
        resume: bool,
    ) -> Result<WorkflowStatus, RunError> {
        // reconnect defensively in case this supervisor restarted
        // independently of the job
        self.db.initialize().await?;

        let work_dir = self.settings.workflows_dir.join(&workflow.id);
        std::fs::create_dir_all(&work_dir)?;

        let command = build_command(workflow, &work_dir, &self.settings, resume)?;
        let mut handle = self.launcher.launch(&command, &work_dir)?;
        let pid = handle.pid();

        let recorder = StateRecorder::new(self.db.clone());

        tracing::info!(pid, run_name = %command.run_name, "saving workflow pid");
        recorder.set_pid(workflow, pid).await?;

        tracing::info!(pid, "waiting for workflow to finish");
        let status = handle.wait().await?;

        if !status.success() {
            tracing::error!(pid, code = status.code().unwrap_or(-1), "workflow failed");
            recorder.set_status(workflow, WorkflowStatus::Failed).await?;
            return Ok(WorkflowStatus::Failed);
        }

        tracing::info!(pid, "workflow completed");
        // the pipeline's own exit code is the authoritative signal; the
        // run is recorded as completed before the export is attempted
        recorder
            .set_status(workflow, WorkflowStatus::Completed)
            .await?;

        tracing::info!(pid, "saving output data");
        let output_dir = work_dir.join(&workflow.output_dir);
        match self.exporter.export(&workflow.id, &output_dir).await {
            Ok(outcome) => {
                if !outcome.output.is_empty() {
                    tracing::info!(pid, "{}", outcome.output.trim_end());
                }
                if outcome.success() {
                    tracing::info!(pid, "save output data completed");
                } else {
                    tracing::warn!(pid, code = outcome.exit_code, "save output data failed");
                }
            }
            Err(e) => {
                tracing::warn!(pid, "save output data failed: {}", e);
            }
        }

        Ok(WorkflowStatus::Completed)
    }
}
