//! Configuration for the dns-edge dispatcher, organized by concern:
//! - `root`: main configuration struct and file loading
//! - `server`: listen address and base path
//! - `upstream`: resolver worker instances and selection strategy
//! - `cache`: edge cache bounds
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::Config;
pub use server::ServerConfig;
pub use upstream::{SelectionStrategy, UpstreamConfig};
