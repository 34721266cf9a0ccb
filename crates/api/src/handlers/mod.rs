pub mod cached;
pub mod lookup;
pub mod passthrough;

pub use cached::{dns_servers, dns_types};
pub use lookup::lookup;
pub use passthrough::passthrough;

use crate::state::AppState;
use axum::body::Body;
use axum::http::{header, HeaderName, HeaderValue, Uri};
use axum::response::Response;
use dns_edge_application::{CacheKey, ResponseSnapshot};
use dns_edge_domain::EdgeError;
use std::sync::Arc;

/// Marker header telling the client whether the response came out of the
/// edge cache (`HIT`) or was freshly computed (`MISS`).
pub const CACHE_STATUS_HEADER: HeaderName = HeaderName::from_static("x-edge-cache");

pub(crate) fn path_and_query(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

/// Outbound response built from a snapshot, stamped with the cache marker.
/// The marker always wins over a backend-supplied value of the same name.
pub(crate) fn marked_response(mut snapshot: ResponseSnapshot, marker: &'static str) -> Response {
    snapshot
        .headers
        .insert(CACHE_STATUS_HEADER, HeaderValue::from_static(marker));
    raw_response(snapshot)
}

/// Outbound response without any cache annotation (pure passthrough).
pub(crate) fn raw_response(mut snapshot: ResponseSnapshot) -> Response {
    // The body is fully buffered here; framing headers from the backend
    // would no longer be accurate.
    snapshot.headers.remove(header::CONTENT_LENGTH);
    snapshot.headers.remove(header::TRANSFER_ENCODING);

    let mut response = Response::new(Body::from(snapshot.body));
    *response.status_mut() = snapshot.status;
    *response.headers_mut() = snapshot.headers;
    response
}

/// Detached cache population: the handler never waits for the write, and a
/// failed or refused write only ever shows up in the logs.
pub(crate) fn spawn_cache_write(state: &AppState, key: CacheKey, snapshot: ResponseSnapshot) {
    let cache = Arc::clone(&state.cache);
    tokio::spawn(async move {
        cache.store(key, snapshot).await;
    });
}

/// Message for the plain-text 500 path: recognized failures surface
/// verbatim, anything else is replaced with a generic message.
pub(crate) fn failure_message(err: &EdgeError) -> String {
    match err {
        EdgeError::BackendUnavailable(_) | EdgeError::MalformedBackendResponse(_) => {
            err.to_string()
        }
        _ => "Unknown error".to_string(),
    }
}
