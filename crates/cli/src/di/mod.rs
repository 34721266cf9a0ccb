use dns_edge_api::AppState;
use dns_edge_domain::Config;
use dns_edge_infrastructure::{EdgeResponseCache, InstancePool};
use std::sync::Arc;

/// Composition root: wires the instance pool and the edge cache into the
/// API state.
pub fn build_state(config: &Config) -> AppState {
    let pool = InstancePool::new(&config.upstream);
    let cache = EdgeResponseCache::new(config.cache.max_entries);

    AppState {
        selector: Arc::new(pool),
        cache: Arc::new(cache),
        fan_out: config.upstream.fan_out,
    }
}
