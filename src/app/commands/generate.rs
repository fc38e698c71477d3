//! Generate command - writes primary and replica configuration files.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use crate::app::AppContext;
use crate::domain::node::config_directories;
use crate::domain::{
    AppError, ClusterConfig, INIT_SQL_FILE, PG_HBA_FILE, PRIMARY_CONFIG_DIR, REPLICA_LINK_FILE,
    REPLICA_STATIC_FILES, ReplicaIndex,
};
use crate::ports::ClusterStore;

/// Options for a generator run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output root; defaults to the current directory.
    pub output_dir: Option<PathBuf>,
    /// Env file consulted for unset variables; defaults to `./.env` when present.
    pub env_file: Option<PathBuf>,
    /// Directory holding replica `pg_hba.conf`/`pg_ident.conf`; defaults to `slave-template/config`.
    pub template_dir: Option<PathBuf>,
    /// Reject credentials that would break generated syntax.
    pub strict: bool,
}

/// Outcome of a generator run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    /// Rendered files, relative to the output root, in write order.
    pub written: Vec<PathBuf>,
    /// Static files copied into replica directories.
    pub copied: Vec<PathBuf>,
    /// Replicas whose static-file copy failed.
    pub copy_failures: Vec<CopyFailure>,
}

/// A replica static-file copy that failed and was skipped.
#[derive(Debug, Clone, Serialize)]
pub struct CopyFailure {
    pub replica: ReplicaIndex,
    pub file: PathBuf,
    pub cause: String,
}

impl GenerationReport {
    /// True when every replica received its static files.
    pub fn is_complete(&self) -> bool {
        self.copy_failures.is_empty()
    }
}

/// Execute the generate command.
///
/// Creates `master/config` and every `slave-<i>/config`, then for each replica in
/// ascending order writes `postgresql.auto.conf` and copies the static files from
/// `template_dir`, then writes the primary's `init.sql` and `pg_hba.conf`.
///
/// Directory creation and rendered-file writes are fatal. A failed static-file copy
/// is logged, recorded in the report, and does not stop the run.
pub fn execute<S: ClusterStore>(
    ctx: &AppContext<S>,
    config: &ClusterConfig,
    template_dir: &Path,
) -> Result<GenerationReport, AppError> {
    let store = ctx.store();
    let renderer = ctx.renderer();
    let mut report = GenerationReport::default();

    for dir in config_directories(config.replication_count) {
        store.ensure_dir(&dir)?;
    }

    for replica in config.replicas() {
        let link_path = replica.config_dir().join(REPLICA_LINK_FILE);
        store.write_file(&link_path, &renderer.render_replica_link_info(config, replica)?)?;
        info!("Writing {} for {}", REPLICA_LINK_FILE, replica);
        report.written.push(link_path);

        provision_replica_static_files(store, template_dir, replica, &mut report);
    }

    let primary_dir = Path::new(PRIMARY_CONFIG_DIR);

    let init_path = primary_dir.join(INIT_SQL_FILE);
    store.write_file(&init_path, &renderer.render_init_script(config)?)?;
    report.written.push(init_path);

    let hba_path = primary_dir.join(PG_HBA_FILE);
    store.write_file(&hba_path, &renderer.render_host_auth_rules(config)?)?;
    report.written.push(hba_path);

    info!("Wrote {} and {} for primary", INIT_SQL_FILE, PG_HBA_FILE);
    Ok(report)
}

fn provision_replica_static_files<S: ClusterStore>(
    store: &S,
    template_dir: &Path,
    replica: ReplicaIndex,
    report: &mut GenerationReport,
) {
    info!("Copying config files from {} to {}", template_dir.display(), replica);

    for file in REPLICA_STATIC_FILES {
        let from = template_dir.join(file);
        let to = replica.config_dir().join(file);

        if let Err(err) = store.copy_file(&from, &to) {
            error!(replica = replica.get(), file, "Error copying files for {}: {}", replica, err);
            report.copy_failures.push(CopyFailure {
                replica,
                file: PathBuf::from(file),
                cause: err.to_string(),
            });
            return;
        }
        report.copied.push(to);
    }

    info!("Successfully copied config files for {}", replica);
}
