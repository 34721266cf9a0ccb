//! Process-wide, best-effort edge cache for full HTTP response snapshots.

use async_trait::async_trait;
use dashmap::DashMap;
use dns_edge_application::{CacheKey, ResponseCache, ResponseSnapshot};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Keyed store of response snapshots with per-entry expiry.
///
/// Entry lifetime comes from the snapshot's own `Cache-Control: max-age` at
/// write time; snapshots without a positive max-age are refused, so the
/// advertised directive and the stored state can never disagree. Capacity-
/// and TTL-driven eviction only — nothing ever deletes entries explicitly.
pub struct EdgeResponseCache {
    entries: DashMap<CacheKey, CachedEntry>,
    max_entries: usize,
}

struct CachedEntry {
    response: ResponseSnapshot,
    expires_at: Instant,
}

impl EdgeResponseCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sweep_expired(&self) {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        let evicted = before.saturating_sub(self.entries.len());
        if evicted > 0 {
            debug!(evicted, "swept expired edge cache entries");
        }
    }
}

#[async_trait]
impl ResponseCache for EdgeResponseCache {
    async fn lookup(&self, key: &CacheKey) -> Option<ResponseSnapshot> {
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > Instant::now() {
                trace!(uri = %key.uri, "edge cache hit");
                return Some(entry.response.clone());
            }
            // Expired, lazy-delete.
            drop(entry);
            self.entries.remove(key);
        }
        None
    }

    async fn store(&self, key: CacheKey, response: ResponseSnapshot) {
        let Some(max_age) = response.max_age().filter(|&secs| secs > 0) else {
            debug!(uri = %key.uri, "snapshot advertises no freshness, skipping store");
            return;
        };

        if self.entries.len() >= self.max_entries {
            self.sweep_expired();
            if self.entries.len() >= self.max_entries {
                warn!(
                    uri = %key.uri,
                    max_entries = self.max_entries,
                    "edge cache full, dropping write"
                );
                return;
            }
        }

        let expires_at = Instant::now() + Duration::from_secs(max_age);
        trace!(uri = %key.uri, max_age, "storing edge cache entry");
        self.entries.insert(
            key,
            CachedEntry {
                response,
                expires_at,
            },
        );
    }
}
