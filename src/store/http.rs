// ============================================================================
// HTTP Store Client
// ============================================================================
//
// reqwest-backed implementation of RemoteStore against the backend REST
// service. Handles:
// - Request forwarding (GET / PATCH / POST, JSON bodies)
// - Response relaying
// - Error normalization (non-2xx and transport failures -> StoreError)
//
// No retries: a failed call surfaces immediately and the caller decides.
//
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::metrics;
use crate::store::{RemoteStore, StoreError};

/// HTTP client for the backend entity store
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        // Configure connection pooling and keep-alive
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn entity_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    /// Relay the store's JSON body, or normalize a non-2xx status.
    async fn read_response(response: reqwest::Response) -> Result<Value, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn fetch(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
        let url = self.entity_url(collection, id);
        metrics::STORE_READS_TOTAL.inc();
        let timer = metrics::STORE_REQUEST_SECONDS.start_timer();

        let response = self.client.get(&url).send().await;
        timer.observe_duration();

        Self::read_response(response?).await
    }

    async fn update(&self, collection: &str, id: &str, body: Value) -> Result<Value, StoreError> {
        let url = self.entity_url(collection, id);
        metrics::STORE_WRITES_TOTAL.inc();
        let timer = metrics::STORE_REQUEST_SECONDS.start_timer();

        let response = self.client.patch(&url).json(&body).send().await;
        timer.observe_duration();

        Self::read_response(response?).await
    }

    async fn create(&self, collection: &str, body: Value) -> Result<Value, StoreError> {
        let url = self.collection_url(collection);
        metrics::STORE_WRITES_TOTAL.inc();
        let timer = metrics::STORE_REQUEST_SECONDS.start_timer();

        let response = self.client.post(&url).json(&body).send().await;
        timer.observe_duration();

        Self::read_response(response?).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let health_url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&health_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status.as_u16(), "Store health check failed");
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        Ok(())
    }
}
