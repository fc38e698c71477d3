//! replgen: generate primary/replica PostgreSQL cluster configuration files.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use app::{AppContext, commands::generate, commands::render};
use domain::REPLICA_TEMPLATE_DIR;
use services::{ConfigRenderer, FilesystemClusterStore};

pub use app::commands::generate::{CopyFailure, GenerateOptions, GenerationReport};
pub use app::commands::render::RenderTarget;
pub use domain::{AppError, AuthMethod, ClusterConfig, ReplicaIndex};

/// Generate configuration files for the primary and every replica.
///
/// Loads [`ClusterConfig`] from the environment, then writes:
/// - `master/config/init.sql` and `master/config/pg_hba.conf`
/// - `slave-<i>/config/postgresql.auto.conf` for `i = 1..=REPLICATION_COUNT`
/// - `slave-<i>/config/pg_hba.conf` and `pg_ident.conf`, copied from the template directory
///
/// Copy failures do not fail the call; inspect [`GenerationReport::copy_failures`].
pub fn generate(options: GenerateOptions) -> Result<GenerationReport, AppError> {
    let config = ClusterConfig::load(options.env_file.as_deref())?;
    if options.strict {
        config.check_credentials()?;
    }

    let store = match options.output_dir {
        Some(dir) => FilesystemClusterStore::new(dir),
        None => FilesystemClusterStore::current()?,
    };
    // An explicit template dir is relative to the caller; the default lives under the output root.
    let template_dir = match options.template_dir {
        Some(dir) if dir.is_relative() => std::env::current_dir()?.join(dir),
        Some(dir) => dir,
        None => PathBuf::from(REPLICA_TEMPLATE_DIR),
    };
    let ctx = AppContext::new(store, ConfigRenderer::new()?);

    generate::execute(&ctx, &config, &template_dir)
}

/// Render a single document to a string without writing anything.
pub fn render(target: RenderTarget, env_file: Option<&Path>) -> Result<String, AppError> {
    let config = ClusterConfig::load(env_file)?;
    let renderer = ConfigRenderer::new()?;

    render::execute(&renderer, &config, target)
}
