use async_trait::async_trait;
use dns_edge_application::{BackendInstance, ResponseSnapshot};
use dns_edge_domain::EdgeError;
use tracing::debug;

/// One resolver worker reachable over HTTP, sharing the pool's client.
#[derive(Debug)]
pub struct HttpInstance {
    base_url: String,
    client: reqwest::Client,
}

impl HttpInstance {
    pub fn new(base_url: String, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }
}

#[async_trait]
impl BackendInstance for HttpInstance {
    fn address(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, path_and_query: &str) -> Result<ResponseSnapshot, EdgeError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(%url, "forwarding request to backend instance");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EdgeError::BackendUnavailable(e.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| EdgeError::BackendUnavailable(e.to_string()))?;

        Ok(ResponseSnapshot::new(status, headers, body))
    }
}
