// crates/pipecli/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use pipecore::{Settings, Workflow, WorkflowStatus};
use piperun::{build_command, RunSupervisor};
use std::path::PathBuf;
use std::sync::Arc;

mod store;

use store::FileStore;

#[derive(Parser)]
#[command(name = "pipelaunch")]
#[command(about = "Launch and supervise a pipeline run", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch a workflow and supervise it to completion
    Run {
        /// Path to workflow descriptor JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Resume the previous run of this workflow
        #[arg(short, long)]
        resume: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the launch command without starting anything
    Plan {
        /// Path to workflow descriptor JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Resume the previous run of this workflow
        #[arg(short, long)]
        resume: bool,
    },

    /// Create a new example workflow descriptor
    Init {
        /// Output file path
        #[arg(short, long, default_value = "workflow.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            resume,
            verbose,
        } => {
            if verbose {
                tracing_subscriber::fmt()
                    .with_max_level(tracing::Level::DEBUG)
                    .init();
            } else {
                tracing_subscriber::fmt()
                    .with_max_level(tracing::Level::INFO)
                    .init();
            }

            run_workflow(file, resume).await?;
        }

        Commands::Plan { file, resume } => {
            plan_workflow(file, resume)?;
        }

        Commands::Init { output } => {
            create_example_workflow(output)?;
        }
    }

    Ok(())
}

fn load_workflow(file: &PathBuf) -> Result<Workflow> {
    let json = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&json)?)
}

async fn run_workflow(file: PathBuf, resume: bool) -> Result<()> {
    let settings = Settings::from_env()?;
    let mut workflow = load_workflow(&file)?;

    println!("🚀 Launching workflow: {}", workflow.id);
    println!("   Pipeline: {} @ {}", workflow.pipeline, workflow.revision);
    println!("   Run name: {}", workflow.run_name());
    println!("   Executor: {}", settings.executor);
    println!();

    let db = Arc::new(FileStore::new(&settings.workflows_dir));
    let supervisor = RunSupervisor::new(db, settings);

    let status = supervisor.launch(&mut workflow, resume).await?;

    println!();
    match status {
        WorkflowStatus::Completed => {
            println!("✅ Workflow {} completed", workflow.id);
            Ok(())
        }
        status => {
            println!("❌ Workflow {} finished with status: {}", workflow.id, status);
            std::process::exit(1);
        }
    }
}

fn plan_workflow(file: PathBuf, resume: bool) -> Result<()> {
    let settings = Settings::from_env()?;
    let workflow = load_workflow(&file)?;
    let work_dir = settings.workflows_dir.join(&workflow.id);
    std::fs::create_dir_all(&work_dir)?;

    let command = build_command(&workflow, &work_dir, &settings, resume)?;

    println!("📋 Run name: {}", command.run_name);
    println!("   Work dir: {}", work_dir.display());
    if let Some(script) = &command.script {
        println!("   Run script: {}", script.display());
    }
    println!();
    println!("{}", command.argv().join(" "));

    Ok(())
}

fn create_example_workflow(output: PathBuf) -> Result<()> {
    let workflow = Workflow::new("example", "nextflow-io/hello")
        .with_revision("master")
        .with_profiles("standard")
        .with_output_dir("output")
        .with_container(true);

    let json = serde_json::to_string_pretty(&workflow)?;
    std::fs::write(&output, json)?;

    println!("✨ Created example workflow: {}", output.display());
    println!();
    println!("Run it with:");
    println!("  pipelaunch run --file {}", output.display());

    Ok(())
}
