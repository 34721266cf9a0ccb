#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use bytes::Bytes;
use dns_edge_api::AppState;
use dns_edge_application::{BackendInstance, InstanceSelector, ResponseSnapshot};
use dns_edge_domain::EdgeError;
use dns_edge_infrastructure::EdgeResponseCache;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ============================================================================
// Mock backend instance
// ============================================================================

#[derive(Debug)]
pub struct MockInstance {
    snapshot: ResponseSnapshot,
    fetch_count: AtomicU64,
}

impl MockInstance {
    pub fn json(body: Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Self {
            snapshot: ResponseSnapshot::new(
                StatusCode::OK,
                headers,
                Bytes::from(body.to_string()),
            ),
            fetch_count: AtomicU64::new(0),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            snapshot: ResponseSnapshot::new(status, HeaderMap::new(), Bytes::from(body.to_string())),
            fetch_count: AtomicU64::new(0),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.snapshot.headers.insert(
            axum::http::HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
        self
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BackendInstance for MockInstance {
    fn address(&self) -> &str {
        "mock-instance"
    }

    async fn fetch(&self, _path_and_query: &str) -> Result<ResponseSnapshot, EdgeError> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.snapshot.clone())
    }
}

// ============================================================================
// Mock selectors
// ============================================================================

pub struct MockSelector {
    instance: Arc<MockInstance>,
    acquire_count: AtomicU64,
}

impl MockSelector {
    pub fn new(instance: Arc<MockInstance>) -> Self {
        Self {
            instance,
            acquire_count: AtomicU64::new(0),
        }
    }

    pub fn acquire_count(&self) -> u64 {
        self.acquire_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl InstanceSelector for MockSelector {
    async fn acquire(&self, _fan_out: usize) -> Result<Arc<dyn BackendInstance>, EdgeError> {
        self.acquire_count.fetch_add(1, Ordering::Relaxed);
        let instance: Arc<dyn BackendInstance> = self.instance.clone();
        Ok(instance)
    }
}

pub struct FailingSelector;

#[async_trait]
impl InstanceSelector for FailingSelector {
    async fn acquire(&self, _fan_out: usize) -> Result<Arc<dyn BackendInstance>, EdgeError> {
        Err(EdgeError::BackendUnavailable(
            "no reachable instance".to_string(),
        ))
    }
}

// ============================================================================
// State and fixtures
// ============================================================================

pub fn app_state(selector: Arc<dyn InstanceSelector>, cache: Arc<EdgeResponseCache>) -> AppState {
    AppState {
        selector,
        cache,
        fan_out: 3,
    }
}

/// A single-answer lookup response in the resolver worker's wire format.
pub fn lookup_body(ttl: Value) -> Value {
    json!({
        "question": "example.com.",
        "type": "A",
        "answers": [{
            "server": "Cloudflare (1.1.1.1:53)",
            "values": ["93.184.215.14"],
            "server_address": "1.1.1.1:53",
            "ttl": ttl,
            "duration": 1_200_000,
            "duration_string": "1.2ms"
        }],
        "location": "FRA",
        "region": "Western Europe",
        "country": "DE",
        "total_duration": 1_500_000,
        "total_duration_string": "1.5ms"
    })
}
