// ============================================================================
// Feedback Routes
// ============================================================================
//
// Endpoints:
// - POST /api/feedback - Accept a feedback submission
//
// Required fields: pitchId, curatorId, mainReason. Everything else in the
// body is kept and echoed back alongside the generated id.
//
// ============================================================================

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::{Map, Value, json};
use std::sync::Arc;

use crate::audit::AuditEventKind;
use crate::context::AppContext;
use crate::error::AppError;
use crate::feedback::FeedbackRecord;
use crate::metrics;

/// POST /api/feedback
pub async fn submit_feedback(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Validate required fields before touching the sink
    let Some(record) = parse_record(&body) else {
        ctx.audit
            .record(
                AuditEventKind::PayloadRejected,
                None,
                Some("feedback submission missing required fields".to_string()),
            )
            .await;
        return Err(AppError::validation("Missing required fields"));
    };

    // 2. Store through the sink. Unlike the proxy routes, this path
    //    surfaces the underlying error message to the caller.
    let id = ctx
        .feedback
        .store(record.clone())
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    metrics::FEEDBACK_SUBMITTED_TOTAL.inc();
    tracing::info!(feedback_id = id, pitch_id = %record.pitch_id, "Stored feedback");

    // 3. Echo the record with its generated id
    let mut echoed = match serde_json::to_value(&record)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    echoed.insert("id".to_string(), json!(id));

    Ok(Json(Value::Object(echoed)))
}

/// Pull a record out of the raw body, or None if a required field is
/// missing or empty.
fn parse_record(body: &Map<String, Value>) -> Option<FeedbackRecord> {
    let required = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    let pitch_id = required("pitchId")?;
    let curator_id = required("curatorId")?;
    let main_reason = required("mainReason")?;

    let extra: Map<String, Value> = body
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "pitchId" | "curatorId" | "mainReason"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Some(FeedbackRecord {
        pitch_id,
        curator_id,
        main_reason,
        extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn all_required_fields_parse() {
        let record = parse_record(&body(json!({
            "pitchId": "pit_1",
            "curatorId": "cur_1",
            "mainReason": "off-brief",
            "comments": "tempo feels rushed"
        })))
        .unwrap();

        assert_eq!(record.pitch_id, "pit_1");
        assert_eq!(record.main_reason, "off-brief");
        assert_eq!(record.extra.get("comments"), Some(&json!("tempo feels rushed")));
        assert!(!record.extra.contains_key("pitchId"));
    }

    #[test]
    fn missing_main_reason_is_rejected() {
        assert!(parse_record(&body(json!({
            "pitchId": "pit_1",
            "curatorId": "cur_1"
        })))
        .is_none());
    }

    #[test]
    fn empty_required_field_is_rejected() {
        assert!(parse_record(&body(json!({
            "pitchId": "pit_1",
            "curatorId": "",
            "mainReason": "off-brief"
        })))
        .is_none());
    }
}
