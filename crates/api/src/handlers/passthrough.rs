use super::{failure_message, path_and_query, raw_response};
use crate::state::AppState;
use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, instrument};

/// Health and debug endpoints: acquire an instance, forward the request,
/// return the backend's response unmodified. No caching, no transformation.
#[instrument(skip_all, name = "api_passthrough")]
pub async fn passthrough(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    let result = async {
        let instance = state.selector.acquire(state.fan_out).await?;
        instance.fetch(path_and_query(&uri)).await
    }
    .await;

    match result {
        Ok(snapshot) => raw_response(snapshot),
        Err(err) => {
            error!(error = %err, uri = %uri, "passthrough failed");
            (StatusCode::INTERNAL_SERVER_ERROR, failure_message(&err)).into_response()
        }
    }
}
