use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdgeError {
    #[error("Missing domain or type query parameters")]
    MissingParameters,

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Malformed backend response: {0}")]
    MalformedBackendResponse(String),
}
