use pipecore::{Executor, RunError, Settings};
use std::path::PathBuf;

// All environment mutation lives in this single test; the test binary's
// other assertions never read the process environment.
#[test]
fn test_settings_from_env() {
    // defaults when nothing is set
    std::env::remove_var("NXF_EXECUTOR");
    std::env::remove_var("WORKFLOWS_DIR");
    std::env::remove_var("PVC_NAME");
    std::env::remove_var("SAVE_SCRIPT");

    let settings = Settings::from_env().unwrap();
    assert_eq!(settings.executor, Executor::Local);
    assert_eq!(settings.workflows_dir, PathBuf::from("./_workflows"));
    assert_eq!(settings.pvc_name, "");
    assert_eq!(settings.save_script, PathBuf::from("scripts/kube-save.sh"));

    // explicit values
    std::env::set_var("NXF_EXECUTOR", "k8s");
    std::env::set_var("WORKFLOWS_DIR", "/workspace/_workflows");
    std::env::set_var("PVC_NAME", "deepgtex-prp");
    std::env::set_var("SAVE_SCRIPT", "/opt/save.sh");

    let settings = Settings::from_env().unwrap();
    assert_eq!(settings.executor, Executor::Kubernetes);
    assert_eq!(settings.workflows_dir, PathBuf::from("/workspace/_workflows"));
    assert_eq!(settings.pvc_name, "deepgtex-prp");
    assert_eq!(settings.save_script, PathBuf::from("/opt/save.sh"));

    // an unrecognized executor is a hard configuration error
    std::env::set_var("NXF_EXECUTOR", "pbs");
    let err = Settings::from_env().unwrap_err();
    assert!(matches!(err, RunError::Configuration(_)));

    std::env::remove_var("NXF_EXECUTOR");
    std::env::remove_var("WORKFLOWS_DIR");
    std::env::remove_var("PVC_NAME");
    std::env::remove_var("SAVE_SCRIPT");
}
