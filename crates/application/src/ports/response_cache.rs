use super::instance_selector::ResponseSnapshot;
use async_trait::async_trait;
use http::Method;

/// Normalized request identity: method plus the full request URI (path and
/// query string). No custom key derivation beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub method: Method,
    pub uri: String,
}

impl CacheKey {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
        }
    }
}

/// Application-layer port for the edge cache: a process-wide, keyed,
/// best-effort store of response snapshots that may evict at any time.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Stored response for this key, if present and still fresh.
    async fn lookup(&self, key: &CacheKey) -> Option<ResponseSnapshot>;

    /// Best-effort write. Implementations derive the entry lifetime from
    /// the snapshot's own `Cache-Control` header and must never surface a
    /// failure to the caller.
    async fn store(&self, key: CacheKey, response: ResponseSnapshot);
}
