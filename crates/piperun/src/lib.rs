//! Runtime for supervising a single workflow run
//!
//! Builds the backend-specific launch command, starts the pipeline runner
//! as a detached child process, checkpoints its pid to the datastore,
//! waits for termination, records the final status, and exports output
//! data on success.

mod command;
mod export;
mod launch;
mod recorder;
mod supervisor;

pub use command::{build_command, BuiltCommand};
pub use export::{ExportOutcome, Exporter, ScriptExporter};
pub use launch::{Launcher, ProcessLauncher, RunHandle};
pub use recorder::StateRecorder;
pub use supervisor::RunSupervisor;
