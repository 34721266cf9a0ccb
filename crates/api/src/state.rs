use dns_edge_application::{InstanceSelector, ResponseCache};
use std::sync::Arc;

/// Shared per-request context. Both collaborators sit behind their ports so
/// tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<dyn InstanceSelector>,
    pub cache: Arc<dyn ResponseCache>,
    /// Fan-out breadth passed to every instance acquisition.
    pub fan_out: usize,
}
