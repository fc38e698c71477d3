//! CLI Adapter.

mod generate;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "replgen")]
#[command(version)]
#[command(
    about = "Generate primary/replica PostgreSQL cluster configuration files",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write init.sql, pg_hba.conf, and per-replica postgresql.auto.conf
    #[clap(visible_alias = "g")]
    Generate {
        /// Output root containing master/ and slave-<i>/ (defaults to current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Env file for variables not set in the environment (defaults to ./.env if present)
        #[arg(short, long)]
        env_file: Option<PathBuf>,
        /// Directory holding replica pg_hba.conf and pg_ident.conf
        #[arg(short, long)]
        template_dir: Option<PathBuf>,
        /// Reject credentials that would break generated SQL or conninfo syntax
        #[arg(long)]
        strict: bool,
        /// Print the generation report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one generated document to stdout
    #[clap(visible_alias = "r")]
    Render {
        #[command(subcommand)]
        target: render::RenderCommands,
        /// Env file for variables not set in the environment (defaults to ./.env if present)
        #[arg(short, long, global = true)]
        env_file: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { output_dir, env_file, template_dir, strict, json } => {
            generate::run_generate(
                crate::GenerateOptions { output_dir, env_file, template_dir, strict },
                json,
            )
        }
        Commands::Render { target, env_file } => render::run_render(target, env_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Progress and diagnostics go to stderr so stdout stays usable for rendered output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
