// ============================================================================
// Feedback Sink
// ============================================================================
//
// Storage contract for curator feedback on pitches: store(record) -> id.
// The default sink keeps records in memory only; swap in a persistent
// implementation without touching the route.
//
// ============================================================================

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

/// A validated feedback submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub pitch_id: String,
    pub curator_id: String,
    pub main_reason: String,

    /// Optional fields submitted alongside the required ones; echoed back
    /// verbatim in the response.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Storage sink for feedback records.
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    /// Store a record, returning its generated numeric id.
    async fn store(&self, record: FeedbackRecord) -> Result<i64>;
}

/// In-memory sink. Ids are epoch milliseconds.
#[derive(Default)]
pub struct MemoryFeedbackSink {
    records: Mutex<Vec<(i64, FeedbackRecord)>>,
}

impl MemoryFeedbackSink {
    /// Number of records held.
    pub async fn stored(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl FeedbackSink for MemoryFeedbackSink {
    async fn store(&self, record: FeedbackRecord) -> Result<i64> {
        let id = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as i64;
        self.records.lock().await.push((id, record));
        Ok(id)
    }
}
