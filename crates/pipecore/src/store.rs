use crate::{RunError, Workflow};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Interface to the shared datastore holding workflow descriptors
///
/// The supervisor persists `pid` and `status` through this interface.
/// `workflow_update` replaces the whole stored descriptor and must be
/// idempotent under retry.
#[async_trait]
pub trait Datastore: Send + Sync {
    /// (Re-)establish the datastore connection
    ///
    /// Called at the start of every run so a supervisor that restarted
    /// independently of the job can recover its connection.
    async fn initialize(&self) -> Result<(), RunError>;

    /// Write the full descriptor back under the given workflow id
    async fn workflow_update(&self, id: &str, workflow: &Workflow) -> Result<(), RunError>;
}

/// In-process datastore backed by a map
///
/// Used by tests and as a default when no external datastore is wired up.
#[derive(Default)]
pub struct MemoryStore {
    workflows: RwLock<HashMap<String, Workflow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &str) -> Option<Workflow> {
        self.workflows.read().await.get(id).cloned()
    }
}

#[async_trait]
impl Datastore for MemoryStore {
    async fn initialize(&self) -> Result<(), RunError> {
        Ok(())
    }

    async fn workflow_update(&self, id: &str, workflow: &Workflow) -> Result<(), RunError> {
        let mut workflows = self.workflows.write().await;
        workflows.insert(id.to_string(), workflow.clone());
        Ok(())
    }
}
