use pipecore::{Datastore, RunError, Workflow, WorkflowStatus};
use std::sync::Arc;

/// Sole writer of a workflow's `pid` and `status` fields
///
/// Mutates one field on the in-memory descriptor and writes the whole
/// descriptor back through the datastore. Not safe against concurrent
/// writers to the same descriptor; the supervisor serializes updates by
/// holding the only mutable reference for the run's lifetime.
pub struct StateRecorder {
    db: Arc<dyn Datastore>,
}

impl StateRecorder {
    pub fn new(db: Arc<dyn Datastore>) -> Self {
        Self { db }
    }

    pub async fn set_pid(&self, workflow: &mut Workflow, pid: u32) -> Result<(), RunError> {
        workflow.pid = Some(pid);
        self.db.workflow_update(&workflow.id, workflow).await
    }

    /// Record a status transition
    ///
    /// Status only moves forward; any attempt to leave a terminal state
    /// is rejected.
    pub async fn set_status(
        &self,
        workflow: &mut Workflow,
        status: WorkflowStatus,
    ) -> Result<(), RunError> {
        if workflow.status.is_terminal() && workflow.status != status {
            return Err(RunError::InvalidTransition {
                from: workflow.status,
                to: status,
            });
        }
        workflow.status = status;
        self.db.workflow_update(&workflow.id, workflow).await
    }
}
