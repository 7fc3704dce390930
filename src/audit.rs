// ============================================================================
// Audit Trail - Gateway Diagnostics
// ============================================================================
//
// Bounded, append-only record of notable gateway events:
// - Session rejections (no resolvable curator identity)
// - Payload rejections (failed validation)
// - Upstream read/write failures
//
// Retention is capped at the configured capacity; older events are dropped
// as new ones arrive. Readable via GET /admin/audit.
//
// ============================================================================

use chrono::Utc;
use serde::Serialize;
use std::collections::VecDeque;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Audit event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventKind {
    /// Request carried no token, or the token resolved to no curator
    SessionRejected,
    /// Request body failed validation
    PayloadRejected,
    /// Read against the backend store failed
    UpstreamReadFailed,
    /// Write against the backend store failed
    UpstreamWriteFailed,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub id: Uuid,

    /// Event timestamp (ISO8601)
    pub timestamp: String,

    pub kind: AuditEventKind,

    /// Entity the event concerns, e.g. "campaign:cmp_81"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// Additional context/error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Bounded audit trail. Keeps the most recent `capacity` events.
pub struct AuditTrail {
    capacity: usize,
    events: Mutex<VecDeque<AuditEvent>>,
}

impl AuditTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            events: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append an event, evicting the oldest entries past capacity.
    pub async fn record(&self, kind: AuditEventKind, entity: Option<String>, detail: Option<String>) {
        let event = AuditEvent {
            id: Uuid::new_v4(),
            timestamp: Utc::now().to_rfc3339(),
            kind,
            entity,
            detail,
        };

        tracing::debug!(
            kind = ?event.kind,
            entity = ?event.entity,
            "Recording audit event"
        );

        let mut events = self.events.lock().await;
        events.push_back(event);
        while events.len() > self.capacity {
            events.pop_front();
        }
    }

    /// Recent events, oldest first.
    pub async fn recent(&self) -> Vec<AuditEvent> {
        self.events.lock().await.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn retention_is_bounded() {
        let trail = AuditTrail::new(3);
        for i in 0..5 {
            trail
                .record(AuditEventKind::PayloadRejected, None, Some(format!("event {i}")))
                .await;
        }

        let events = trail.recent().await;
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].detail.as_deref(), Some("event 2"));
        assert_eq!(events[2].detail.as_deref(), Some("event 4"));
    }

    #[tokio::test]
    async fn events_carry_kind_and_entity() {
        let trail = AuditTrail::new(8);
        trail
            .record(
                AuditEventKind::UpstreamWriteFailed,
                Some("campaign:cmp_1".to_string()),
                None,
            )
            .await;

        let events = trail.recent().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, AuditEventKind::UpstreamWriteFailed);
        assert_eq!(events[0].entity.as_deref(), Some("campaign:cmp_1"));
    }
}
