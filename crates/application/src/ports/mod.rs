pub mod instance_selector;
pub mod response_cache;

pub use instance_selector::{BackendInstance, InstanceSelector, ResponseSnapshot};
pub use response_cache::{CacheKey, ResponseCache};
