// ============================================================================
// Increment-Proxy Gateway
// ============================================================================
//
// Translates client-issued partial updates, which may express deltas via
// "<base>_increment" sentinel keys, into absolute-value updates understood
// by the backend store, then performs the update and relays the result.
//
// Control flow: client -> gateway -> store (read, only when a sentinel is
// present) -> gateway (merge) -> store (write) -> gateway -> client.
//
// ============================================================================

mod increment;

pub use increment::{INCREMENT_SUFFIX, has_increment_keys, resolve_increments};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::AppError;
use crate::metrics;
use crate::store::{RemoteStore, StoreError};

/// Failure of a partial update, keyed by the step that failed.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("upstream read failed: {0}")]
    UpstreamRead(#[source] StoreError),

    #[error("upstream write failed: {0}")]
    UpstreamWrite(#[source] StoreError),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl GatewayError {
    /// Convert into an AppError carrying the route's fixed public message.
    /// Payload problems stay client errors and keep their own message.
    pub fn into_app_error(self, public: &str) -> AppError {
        match self {
            GatewayError::UpstreamRead(err) => AppError::upstream_read(public, err.to_string()),
            GatewayError::UpstreamWrite(err) => AppError::upstream_write(public, err.to_string()),
            GatewayError::InvalidPayload(msg) => AppError::validation(msg),
        }
    }
}

/// Apply a partial update to one entity.
///
/// Payloads without increment sentinels forward unchanged: one write, no
/// read. Payloads with sentinels trigger a read of the current entity,
/// resolution of each delta into an absolute value, then the write. A
/// failed read aborts before anything is written.
///
/// The merged value is computed from an unguarded read: a concurrent
/// update of the same entity between the read and the write is lost. The
/// store is the sole arbiter of consistency and serializes nothing on the
/// gateway's behalf.
pub async fn apply_partial_update(
    store: &dyn RemoteStore,
    collection: &str,
    id: &str,
    payload: Map<String, Value>,
) -> Result<Value, GatewayError> {
    if !increment::has_increment_keys(&payload) {
        return store
            .update(collection, id, Value::Object(payload))
            .await
            .map_err(GatewayError::UpstreamWrite);
    }

    let current = store
        .fetch(collection, id)
        .await
        .map_err(GatewayError::UpstreamRead)?;

    let merged = increment::resolve_increments(payload, &current)?;
    metrics::INCREMENT_MERGES_TOTAL.inc();

    tracing::debug!(
        collection = %collection,
        id = %id,
        "Resolved increment payload against current entity state"
    );

    store
        .update(collection, id, Value::Object(merged))
        .await
        .map_err(GatewayError::UpstreamWrite)
}
