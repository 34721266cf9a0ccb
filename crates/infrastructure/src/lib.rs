//! dns-edge infrastructure layer
//!
//! Concrete implementations behind the application ports: the DashMap-backed
//! edge response cache and the reqwest-backed resolver worker pool.
pub mod cache;
pub mod pool;

pub use cache::EdgeResponseCache;
pub use pool::{HttpInstance, InstancePool};
