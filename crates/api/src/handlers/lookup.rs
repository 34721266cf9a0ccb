use super::{failure_message, marked_response, path_and_query, spawn_cache_write};
use crate::dto::ErrorBody;
use crate::state::AppState;
use axum::extract::{OriginalUri, Query, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use dns_edge_application::{decide, shortest_ttl, CacheKey, ResponseSnapshot};
use dns_edge_domain::{EdgeError, EndpointKind, LookupQuery, LookupResult};
use tracing::{debug, error, instrument};

/// Dynamic lookup endpoint: cache lifetime derived from the shortest TTL in
/// the backend's answers.
#[instrument(skip_all, name = "api_lookup")]
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    // Validation short-circuits before any I/O.
    if let Err(err) = query.validate() {
        debug!(uri = %uri, "rejecting lookup with missing parameters");
        return (StatusCode::BAD_REQUEST, Json(ErrorBody::new(err.to_string()))).into_response();
    }

    let key = CacheKey::new(Method::GET, uri.to_string());

    if !query.bypass_cache() {
        if let Some(snapshot) = state.cache.lookup(&key).await {
            debug!(uri = %key.uri, "serving lookup from edge cache");
            return marked_response(snapshot, "HIT");
        }
    }

    match resolve_fresh(&state, &query, &key, &uri).await {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, uri = %key.uri, "lookup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, failure_message(&err)).into_response()
        }
    }
}

/// Miss path: acquire an instance, forward, shape the response, and kick
/// off the detached cache write. Any failure in here becomes the handler's
/// single 500 boundary above; nothing is written to the cache on failure.
async fn resolve_fresh(
    state: &AppState,
    query: &LookupQuery,
    key: &CacheKey,
    uri: &Uri,
) -> Result<Response, EdgeError> {
    let instance = state.selector.acquire(state.fan_out).await?;
    let upstream = instance.fetch(path_and_query(uri)).await?;

    let result: LookupResult = serde_json::from_slice(&upstream.body)
        .map_err(|e| EdgeError::MalformedBackendResponse(e.to_string()))?;

    let min_ttl = shortest_ttl(&result.answers);
    let decision = decide(EndpointKind::Dynamic, query.directive_bypass(), min_ttl);
    debug!(
        question = %result.question,
        min_ttl = ?min_ttl,
        directive = %decision.cache_control,
        "computed cache directive"
    );

    let body = serde_json::to_vec(&result)
        .map_err(|e| EdgeError::MalformedBackendResponse(e.to_string()))?;

    // This layer's headers are authoritative over anything the backend sent.
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::try_from(decision.cache_control.as_str())
            .unwrap_or(HeaderValue::from_static("no-cache")),
    );

    let snapshot = ResponseSnapshot::new(StatusCode::OK, headers, Bytes::from(body));

    if !query.bypass_cache() {
        spawn_cache_write(state, key.clone(), snapshot.clone());
    }

    Ok(marked_response(snapshot, "MISS"))
}
