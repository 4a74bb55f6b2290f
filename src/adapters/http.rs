use crate::domain::model::FetchedPayload;
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Single GET against a fixed endpoint. No timeout, no retry, and the
/// status code does not decide success.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    endpoint: String,
}

impl HttpFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn get_body(&self) -> Result<FetchedPayload> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let mut response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("API response status: {}", status);
        } else {
            tracing::warn!("API responded with {}, keeping body anyway", status);
        }

        let mut body = Vec::new();
        let mut chunks = 0usize;
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
            chunks += 1;
        }
        tracing::debug!("Received {} bytes in {} chunks", body.len(), chunks);

        Ok(FetchedPayload(String::from_utf8_lossy(&body).into_owned()))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self) -> Result<FetchedPayload> {
        self.get_body().await.inspect_err(|e| {
            tracing::error!("Error fetching data: {}", e);
        })
    }
}
