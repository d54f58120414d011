use pipecore::{Datastore, Executor, MemoryStore, RunError, Workflow, WorkflowStatus};

#[test]
fn test_run_name_zero_pads_attempts() {
    let workflow = Workflow::new("abc123", "main.nf").with_attempts(3);
    assert_eq!(workflow.run_name(), "workflow-abc123-0003");

    let workflow = workflow.with_attempts(42);
    assert_eq!(workflow.run_name(), "workflow-abc123-0042");
}

#[test]
fn test_run_names_differ_per_attempt() {
    let a = Workflow::new("abc123", "main.nf").with_attempts(1);
    let b = Workflow::new("abc123", "main.nf").with_attempts(2);
    assert_ne!(a.run_name(), b.run_name());
}

#[test]
fn test_status_serializes_lowercase() {
    let json = serde_json::to_string(&WorkflowStatus::Completed).unwrap();
    assert_eq!(json, "\"completed\"");

    let status: WorkflowStatus = serde_json::from_str("\"failed\"").unwrap();
    assert_eq!(status, WorkflowStatus::Failed);
}

#[test]
fn test_descriptor_defaults_on_load() {
    // descriptors written by an external caller may omit pid and status
    let json = r#"{
        "id": "wf1",
        "pipeline": "main.nf",
        "revision": "master",
        "profiles": "standard",
        "output_dir": "output",
        "date_created": "2024-01-01T00:00:00Z"
    }"#;
    let workflow: Workflow = serde_json::from_str(json).unwrap();

    assert_eq!(workflow.status, WorkflowStatus::Pending);
    assert_eq!(workflow.pid, None);
    assert_eq!(workflow.attempts, 0);
    assert!(!workflow.with_container);
}

#[test]
fn test_terminal_states() {
    assert!(!WorkflowStatus::Pending.is_terminal());
    assert!(!WorkflowStatus::Running.is_terminal());
    assert!(WorkflowStatus::Completed.is_terminal());
    assert!(WorkflowStatus::Failed.is_terminal());
}

#[test]
fn test_executor_parse() {
    assert_eq!("k8s".parse::<Executor>().unwrap(), Executor::Kubernetes);
    assert_eq!("local".parse::<Executor>().unwrap(), Executor::Local);

    let err = "slurm".parse::<Executor>().unwrap_err();
    assert!(matches!(err, RunError::Configuration(_)));
}

#[tokio::test]
async fn test_memory_store_update() {
    let store = MemoryStore::new();
    store.initialize().await.unwrap();

    let mut workflow = Workflow::new("wf1", "main.nf");
    store.workflow_update("wf1", &workflow).await.unwrap();

    workflow.status = WorkflowStatus::Running;
    store.workflow_update("wf1", &workflow).await.unwrap();

    let stored = store.get("wf1").await.unwrap();
    assert_eq!(stored.status, WorkflowStatus::Running);
}
