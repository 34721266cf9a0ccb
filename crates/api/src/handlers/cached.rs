use super::{failure_message, marked_response, path_and_query, spawn_cache_write};
use crate::state::AppState;
use axum::extract::{OriginalUri, State};
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use dns_edge_application::{CacheKey, ResponseSnapshot, STATIC_DIRECTIVE};
use dns_edge_domain::EdgeError;
use tracing::{debug, error, instrument};

#[instrument(skip_all, name = "api_dns_types")]
pub async fn dns_types(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    cached_passthrough(&state, &uri).await
}

#[instrument(skip_all, name = "api_dns_servers")]
pub async fn dns_servers(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    cached_passthrough(&state, &uri).await
}

/// Shared hit/miss flow for the fixed-lifetime list endpoints. No bypass
/// parameter exists here; the store is always consulted first.
async fn cached_passthrough(state: &AppState, uri: &Uri) -> Response {
    let key = CacheKey::new(Method::GET, uri.to_string());

    if let Some(snapshot) = state.cache.lookup(&key).await {
        debug!(uri = %key.uri, "serving static endpoint from edge cache");
        return marked_response(snapshot, "HIT");
    }

    match fetch_static(state, uri).await {
        Ok(snapshot) => {
            spawn_cache_write(state, key, snapshot.clone());
            marked_response(snapshot, "MISS")
        }
        Err(err) => {
            error!(error = %err, uri = %key.uri, "static passthrough failed");
            (StatusCode::INTERNAL_SERVER_ERROR, failure_message(&err)).into_response()
        }
    }
}

/// Fetch and re-shape a static list response. Backend headers are carried
/// over for any name this layer did not set; this layer's `Cache-Control`,
/// `Content-Type`, and cache marker always win.
async fn fetch_static(state: &AppState, uri: &Uri) -> Result<ResponseSnapshot, EdgeError> {
    let instance = state.selector.acquire(state.fan_out).await?;
    let upstream = instance.fetch(path_and_query(uri)).await?;

    // Re-serialize rather than relaying raw bytes, so a half-written
    // backend body can never land in the cache.
    let value: serde_json::Value = serde_json::from_slice(&upstream.body)
        .map_err(|e| EdgeError::MalformedBackendResponse(e.to_string()))?;
    let body = serde_json::to_vec(&value)
        .map_err(|e| EdgeError::MalformedBackendResponse(e.to_string()))?;

    let mut headers = upstream.headers;
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(STATIC_DIRECTIVE),
    );

    Ok(ResponseSnapshot::new(
        StatusCode::OK,
        headers,
        Bytes::from(body),
    ))
}
