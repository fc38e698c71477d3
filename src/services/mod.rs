mod config_renderer;
mod filesystem_cluster_store;

pub use config_renderer::ConfigRenderer;
pub use filesystem_cluster_store::FilesystemClusterStore;
