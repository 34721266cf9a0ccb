//! Resolver worker pool behind the acquire-an-instance capability.

mod instance;

pub use instance::HttpInstance;

use async_trait::async_trait;
use dns_edge_application::{BackendInstance, InstanceSelector};
use dns_edge_domain::{EdgeError, SelectionStrategy, UpstreamConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Stack-allocated enum dispatch for selection strategies.
enum Strategy {
    Random,
    RoundRobin(AtomicUsize),
}

/// Pool of resolver worker instances sharing one HTTP client.
///
/// Selection is deliberately dumb at this layer: pick one instance, hand it
/// back. No retries, no health probes — a failure propagates to the caller
/// as `BackendUnavailable`.
pub struct InstancePool {
    instances: Vec<Arc<HttpInstance>>,
    strategy: Strategy,
}

impl InstancePool {
    pub fn new(config: &UpstreamConfig) -> Self {
        let client = reqwest::Client::new();
        let instances: Vec<Arc<HttpInstance>> = config
            .instances
            .iter()
            .map(|base| {
                Arc::new(HttpInstance::new(
                    base.trim_end_matches('/').to_string(),
                    client.clone(),
                ))
            })
            .collect();

        let strategy = match config.strategy {
            SelectionStrategy::Random => Strategy::Random,
            SelectionStrategy::RoundRobin => Strategy::RoundRobin(AtomicUsize::new(0)),
        };

        info!(
            instances = instances.len(),
            strategy = ?config.strategy,
            "instance pool initialized"
        );
        Self {
            instances,
            strategy,
        }
    }
}

#[async_trait]
impl InstanceSelector for InstancePool {
    async fn acquire(&self, fan_out: usize) -> Result<Arc<dyn BackendInstance>, EdgeError> {
        if self.instances.is_empty() {
            return Err(EdgeError::BackendUnavailable(
                "no upstream instances configured".to_string(),
            ));
        }

        let index = match &self.strategy {
            // Random-of-N: only the first `fan_out` instances are
            // considered candidates.
            Strategy::Random => {
                let breadth = fan_out.clamp(1, self.instances.len());
                fastrand::usize(..breadth)
            }
            Strategy::RoundRobin(cursor) => {
                cursor.fetch_add(1, Ordering::Relaxed) % self.instances.len()
            }
        };

        let instance = Arc::clone(&self.instances[index]);
        debug!(instance = instance.address(), "acquired backend instance");
        Ok(instance)
    }
}
