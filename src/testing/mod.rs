mod mock_cluster_store;

pub use mock_cluster_store::MockClusterStore;
