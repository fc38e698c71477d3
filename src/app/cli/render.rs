use std::path::PathBuf;

use clap::Subcommand;

use crate::RenderTarget;
use crate::domain::{AppError, ReplicaIndex};

#[derive(Subcommand)]
pub enum RenderCommands {
    /// Primary init.sql
    InitSql,
    /// Primary pg_hba.conf
    PgHba,
    /// Replica postgresql.auto.conf
    Replica {
        /// Replica number, starting at 1
        #[arg(short, long)]
        index: u32,
    },
}

pub fn run_render(target: RenderCommands, env_file: Option<PathBuf>) -> Result<(), AppError> {
    let target = match target {
        RenderCommands::InitSql => RenderTarget::InitSql,
        RenderCommands::PgHba => RenderTarget::PgHba,
        RenderCommands::Replica { index } => {
            let replica = ReplicaIndex::new(index).ok_or_else(|| AppError::InvalidVariable {
                name: "--index",
                value: index.to_string(),
                reason: "replicas are numbered from 1".into(),
            })?;
            RenderTarget::Replica(replica)
        }
    };

    print!("{}", crate::render(target, env_file.as_deref())?);
    Ok(())
}
