//! Per-node directory and file layout of the generated cluster.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Config directory of the primary node, relative to the output root.
pub const PRIMARY_CONFIG_DIR: &str = "master/config";
/// Directory holding the static files copied into every replica.
pub const REPLICA_TEMPLATE_DIR: &str = "slave-template/config";

pub const INIT_SQL_FILE: &str = "init.sql";
pub const PG_HBA_FILE: &str = "pg_hba.conf";
pub const PG_IDENT_FILE: &str = "pg_ident.conf";
pub const REPLICA_LINK_FILE: &str = "postgresql.auto.conf";

/// Files copied verbatim from the replica template directory, in copy order.
pub const REPLICA_STATIC_FILES: [&str; 2] = [PG_HBA_FILE, PG_IDENT_FILE];

/// Port replicas use to reach the primary.
pub const PRIMARY_PORT: u16 = 5432;

/// 1-based replica number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReplicaIndex(u32);

impl ReplicaIndex {
    /// Returns `None` for zero; replicas are numbered from one.
    pub fn new(index: u32) -> Option<Self> {
        (index > 0).then_some(Self(index))
    }

    /// Replicas `1..=count` in ascending order.
    pub fn up_to(count: u32) -> impl Iterator<Item = ReplicaIndex> {
        (1..=count).map(ReplicaIndex)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn config_dir(self) -> PathBuf {
        PathBuf::from(format!("slave-{}", self.0)).join("config")
    }

    /// Physical replication slot reserved on the primary for this replica.
    pub fn slot_name(self) -> String {
        format!("replica_slot_slave{}", self.0)
    }

    /// `application_name` the replica reports to the primary.
    pub fn application_name(self) -> String {
        format!("slave{}", self.0)
    }
}

impl fmt::Display for ReplicaIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slave-{}", self.0)
    }
}

/// Every config directory the generator needs: the primary first, then replicas in order.
pub fn config_directories(replica_count: u32) -> Vec<PathBuf> {
    std::iter::once(PathBuf::from(PRIMARY_CONFIG_DIR))
        .chain(ReplicaIndex::up_to(replica_count).map(ReplicaIndex::config_dir))
        .collect()
}
