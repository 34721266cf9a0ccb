/// The two response shapes the dispatcher caches differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// Lookup endpoint: cache lifetime derived from the answers' TTLs.
    Dynamic,
    /// Server-list and type-list endpoints: fixed one-hour lifetime.
    Static,
}

/// Per-request caching decision. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDecision {
    pub consult_cache: bool,
    /// Literal value for the outbound `Cache-Control` header.
    pub cache_control: String,
}
