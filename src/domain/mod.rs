pub mod auth_method;
pub mod cluster_config;
pub mod error;
pub mod node;

pub use auth_method::AuthMethod;
pub use cluster_config::ClusterConfig;
pub use error::AppError;
pub use node::{
    INIT_SQL_FILE, PG_HBA_FILE, PG_IDENT_FILE, PRIMARY_CONFIG_DIR, PRIMARY_PORT,
    REPLICA_LINK_FILE, REPLICA_STATIC_FILES, REPLICA_TEMPLATE_DIR, ReplicaIndex,
};
