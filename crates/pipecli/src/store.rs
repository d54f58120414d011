use async_trait::async_trait;
use pipecore::{Datastore, RunError, Workflow};
use std::path::PathBuf;

/// Datastore persisting each descriptor as JSON on disk
///
/// Descriptors live at `<root>/<id>/workflow.json`, next to the work dir
/// contents of the run they describe. Writes replace the whole file, so
/// retrying an update is idempotent.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn descriptor_path(&self, id: &str) -> PathBuf {
        self.root.join(id).join("workflow.json")
    }

    pub fn load(&self, id: &str) -> Result<Workflow, RunError> {
        let json = std::fs::read_to_string(self.descriptor_path(id))?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[async_trait]
impl Datastore for FileStore {
    async fn initialize(&self) -> Result<(), RunError> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| RunError::Datastore(format!("cannot create {}: {}", self.root.display(), e)))
    }

    async fn workflow_update(&self, id: &str, workflow: &Workflow) -> Result<(), RunError> {
        let path = self.descriptor_path(id);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| RunError::Datastore(format!("cannot create {}: {}", parent.display(), e)))?;
        }
        let json = serde_json::to_string_pretty(workflow)?;
        std::fs::write(&path, json)
            .map_err(|e| RunError::Datastore(format!("cannot write {}: {}", path.display(), e)))
    }
}
