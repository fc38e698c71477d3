//! Render command - prints one generated document without touching the filesystem.

use tracing::warn;

use crate::domain::{AppError, ClusterConfig, ReplicaIndex};
use crate::services::ConfigRenderer;

/// Document to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Primary `init.sql`.
    InitSql,
    /// Primary `pg_hba.conf`.
    PgHba,
    /// Replica `postgresql.auto.conf`.
    Replica(ReplicaIndex),
}

pub fn execute(
    renderer: &ConfigRenderer,
    config: &ClusterConfig,
    target: RenderTarget,
) -> Result<String, AppError> {
    match target {
        RenderTarget::InitSql => renderer.render_init_script(config),
        RenderTarget::PgHba => renderer.render_host_auth_rules(config),
        RenderTarget::Replica(replica) => {
            if replica.get() > config.replication_count {
                warn!(
                    "{} is beyond REPLICATION_COUNT={}; the primary has no slot for it",
                    replica, config.replication_count
                );
            }
            renderer.render_replica_link_info(config, replica)
        }
    }
}
