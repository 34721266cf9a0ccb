use serde::Serialize;

/// Structured error body for client errors.
#[derive(Serialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
