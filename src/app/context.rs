use crate::ports::ClusterStore;
use crate::services::ConfigRenderer;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ClusterStore> {
    store: S,
    renderer: ConfigRenderer,
}

impl<S: ClusterStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S, renderer: ConfigRenderer) -> Self {
        Self { store, renderer }
    }

    /// Get a reference to the cluster store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &ConfigRenderer {
        &self.renderer
    }
}
