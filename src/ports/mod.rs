mod cluster_store;

pub use cluster_store::ClusterStore;
