//! dns-edge domain layer
pub mod config;
pub mod errors;
pub mod lookup;
pub mod policy;

pub use config::{
    CacheConfig, Config, ConfigError, LoggingConfig, SelectionStrategy, ServerConfig,
    UpstreamConfig,
};
pub use errors::EdgeError;
pub use lookup::{LookupQuery, LookupResult, ServerAnswer};
pub use policy::{CacheDecision, EndpointKind};
