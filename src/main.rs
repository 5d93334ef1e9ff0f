use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ngdocgen::cli::commands;

#[derive(Parser)]
#[command(name = "ngdocgen")]
#[command(
    version,
    about = "Documentation JSON generator for Angular component-library workspaces"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, default_value = ".", help = "Workspace root directory")]
    workspace_root: PathBuf,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation.json for a library project
    Generate {
        #[arg(
            long,
            short,
            help = "Project to document (workspace default project if omitted)"
        )]
        project: Option<String>,

        #[arg(long, help = "Run the pipeline without committing any file")]
        dry_run: bool,
    },

    /// List the workspace's projects and their types
    ListProjects,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Generate { project, dry_run } => {
            commands::generate::run(commands::generate::GenerateOptions {
                project,
                workspace_root: cli.workspace_root,
                dry_run,
            })?;
        }
        Commands::ListProjects => {
            commands::list_projects::run(&cli.workspace_root)?;
        }
    }

    Ok(())
}
