// ============================================================================
// Session Lookup
// ============================================================================
//
// Resolves a bearer token to the curator it belongs to by querying the
// session endpoint. The provider is an injected capability rather than
// ambient state so handlers and tests can substitute it.
//
// Lookup failures fold to "no identity": the caller observes 401 and the
// underlying cause goes to the log.
//
// ============================================================================

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Capability resolving the current request's curator identity.
#[async_trait]
pub trait CurrentUserProvider: Send + Sync {
    /// The curator bound to this token, if any.
    async fn current_curator(&self, token: &str) -> Option<String>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    curator_id: String,
}

/// Session lookup against the configured HTTP endpoint
pub struct HttpSessionProvider {
    client: reqwest::Client,
    session_url: String,
}

impl HttpSessionProvider {
    pub fn new(session_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            session_url: session_url.into(),
        }
    }
}

#[async_trait]
impl CurrentUserProvider for HttpSessionProvider {
    async fn current_curator(&self, token: &str) -> Option<String> {
        let response = match self
            .client
            .get(&self.session_url)
            .bearer_auth(token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(
                status = %response.status().as_u16(),
                "Session lookup did not resolve a curator"
            );
            return None;
        }

        match response.json::<SessionResponse>().await {
            Ok(session) => Some(session.curator_id),
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup returned an unreadable body");
                None
            }
        }
    }
}
