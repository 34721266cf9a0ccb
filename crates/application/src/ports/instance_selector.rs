use async_trait::async_trait;
use bytes::Bytes;
use dns_edge_domain::EdgeError;
use http::{header, HeaderMap, StatusCode};
use std::sync::Arc;

/// Full HTTP response snapshot: what a backend instance returned, and what
/// the edge cache stores.
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ResponseSnapshot {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Seconds of freshness advertised by this snapshot's own
    /// `Cache-Control` header, if any.
    pub fn max_age(&self) -> Option<u64> {
        let value = self.headers.get(header::CACHE_CONTROL)?.to_str().ok()?;
        value
            .split(',')
            .find_map(|directive| directive.trim().strip_prefix("max-age=")?.parse().ok())
    }
}

/// One resolver worker reachable over HTTP. Whatever the selector returns
/// exposes exactly one capability: forward a request, get a response.
#[async_trait]
pub trait BackendInstance: Send + Sync + std::fmt::Debug {
    /// Stable identity of this instance, for logs.
    fn address(&self) -> &str;

    /// Forward a request. `path_and_query` is the inbound request's path
    /// and query string, forwarded verbatim. Transport failures surface as
    /// `EdgeError::BackendUnavailable`.
    async fn fetch(&self, path_and_query: &str) -> Result<ResponseSnapshot, EdgeError>;
}

/// Application-layer port for instance selection.
///
/// The selection/health strategy behind it is opaque to callers: a single
/// blocking call that either returns a usable handle or fails with
/// `EdgeError::BackendUnavailable`. No retries happen above this port.
#[async_trait]
pub trait InstanceSelector: Send + Sync {
    /// Pick one reachable instance, considering at most `fan_out`
    /// candidates.
    async fn acquire(&self, fan_out: usize) -> Result<Arc<dyn BackendInstance>, EdgeError>;
}
