// ============================================================================
// Remote Store
// ============================================================================
//
// The backend REST store owns all durable entity state (campaigns,
// curators, pitches). The gateway holds nothing across requests and
// trusts the store to arbitrate consistency.
//
// ============================================================================

mod http;

pub use http::HttpStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Store access failure
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// JSON entity store addressed by collection name and opaque id.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Read one entity.
    async fn fetch(&self, collection: &str, id: &str) -> Result<Value, StoreError>;

    /// Apply a partial update and return the updated entity.
    async fn update(&self, collection: &str, id: &str, body: Value) -> Result<Value, StoreError>;

    /// Create an entity and return it as stored.
    async fn create(&self, collection: &str, body: Value) -> Result<Value, StoreError>;

    /// Cheap reachability probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
