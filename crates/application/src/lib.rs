//! dns-edge application layer
//!
//! Pure caching logic (TTL extraction, cache-control policy) and the ports
//! behind which the edge cache and the instance pool live. Implementations
//! are injected from the infrastructure layer.
pub mod policy;
pub mod ports;
pub mod ttl;

pub use policy::{decide, STATIC_DIRECTIVE};
pub use ports::{BackendInstance, CacheKey, InstanceSelector, ResponseCache, ResponseSnapshot};
pub use ttl::shortest_ttl;
