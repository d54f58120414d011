use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Workflow run descriptor
///
/// Owned by the caller; the supervisor holds it mutably for the duration
/// of one run. The `pid` and `status` fields are written only through the
/// state recorder while a run is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// Opaque unique identity, assigned by the caller
    pub id: String,
    /// Incremented by the caller before each run; distinguishes
    /// historical runs of the same logical workflow
    #[serde(default)]
    pub attempts: u32,
    /// Pipeline definition reference (e.g. "nf-core/rnaseq" or "main.nf")
    pub pipeline: String,
    /// Pipeline version tag
    pub revision: String,
    /// Execution profile(s) passed through to the pipeline runner
    pub profiles: String,
    /// Where the job writes results, relative to the workflow's work dir
    pub output_dir: PathBuf,
    /// Request container-based execution
    #[serde(default)]
    pub with_container: bool,
    /// Process id of the run, set once the process has started
    #[serde(default)]
    pub pid: Option<u32>,
    #[serde(default)]
    pub status: WorkflowStatus,
    pub date_created: DateTime<Utc>,
}

impl Workflow {
    pub fn new(id: impl Into<String>, pipeline: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attempts: 0,
            pipeline: pipeline.into(),
            revision: "master".to_string(),
            profiles: "standard".to_string(),
            output_dir: PathBuf::from("output"),
            with_container: false,
            pid: None,
            status: WorkflowStatus::Pending,
            date_created: Utc::now(),
        }
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    pub fn with_profiles(mut self, profiles: impl Into<String>) -> Self {
        self.profiles = profiles.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_container(mut self, with_container: bool) -> Self {
        self.with_container = with_container;
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Run name unique per (id, attempts), e.g. `workflow-abc123-0003`
    pub fn run_name(&self) -> String {
        format!("workflow-{}-{:04}", self.id, self.attempts)
    }
}

/// Lifecycle state of a workflow run
///
/// Transitions only move forward: pending -> running -> completed | failed.
/// The terminal states are never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

impl WorkflowStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowStatus::Completed | WorkflowStatus::Failed)
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkflowStatus::Pending => "pending",
            WorkflowStatus::Running => "running",
            WorkflowStatus::Completed => "completed",
            WorkflowStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}
