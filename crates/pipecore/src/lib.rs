//! Core abstractions for the pipelaunch workflow supervisor
//!
//! This crate provides the fundamental types and traits that all other
//! components depend on: the workflow descriptor, the datastore interface,
//! the error taxonomy, and environment-derived settings.

mod config;
mod error;
mod store;
mod workflow;

pub use config::{Executor, Settings};
pub use error::RunError;
pub use store::{Datastore, MemoryStore};
pub use workflow::{Workflow, WorkflowStatus};

/// Result type for supervisor operations
pub type Result<T> = std::result::Result<T, RunError>;
