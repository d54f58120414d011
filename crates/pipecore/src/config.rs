use crate::RunError;
use std::path::PathBuf;
use std::str::FromStr;

/// Execution backend for the pipeline runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Executor {
    /// Cluster-managed execution via `nextflow kuberun`
    Kubernetes,
    /// Local scheduler execution via `srun nextflow run`
    Local,
}

impl FromStr for Executor {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "k8s" => Ok(Executor::Kubernetes),
            "local" => Ok(Executor::Local),
            other => Err(RunError::Configuration(format!(
                "Unknown executor '{}', expected 'k8s' or 'local'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Executor::Kubernetes => f.write_str("k8s"),
            Executor::Local => f.write_str("local"),
        }
    }
}

/// Environment-derived configuration, consumed but not owned by the core
#[derive(Debug, Clone)]
pub struct Settings {
    /// Which backend the command builder targets
    pub executor: Executor,
    /// Base directory under which each workflow gets its own work dir
    pub workflows_dir: PathBuf,
    /// Persistent volume claim mounted by the cluster backend
    pub pvc_name: String,
    /// Script invoked to export output data after a successful run
    pub save_script: PathBuf,
}

impl Settings {
    /// Read settings from the environment
    ///
    /// Recognized variables: `NXF_EXECUTOR` (default "local"),
    /// `WORKFLOWS_DIR` (default "./_workflows"), `PVC_NAME` (default
    /// empty, cluster backend only), `SAVE_SCRIPT` (default
    /// "scripts/kube-save.sh"). An unrecognized executor value is a
    /// configuration error, never a silent fallback.
    pub fn from_env() -> Result<Self, RunError> {
        let executor = std::env::var("NXF_EXECUTOR")
            .unwrap_or_else(|_| "local".to_string())
            .parse()?;

        Ok(Self {
            executor,
            workflows_dir: std::env::var("WORKFLOWS_DIR")
                .unwrap_or_else(|_| "./_workflows".to_string())
                .into(),
            pvc_name: std::env::var("PVC_NAME").unwrap_or_default(),
            save_script: std::env::var("SAVE_SCRIPT")
                .unwrap_or_else(|_| "scripts/kube-save.sh".to_string())
                .into(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            executor: Executor::Local,
            workflows_dir: PathBuf::from("./_workflows"),
            pvc_name: String::new(),
            save_script: PathBuf::from("scripts/kube-save.sh"),
        }
    }
}
