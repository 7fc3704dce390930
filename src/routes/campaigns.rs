// ============================================================================
// Campaign Routes
// ============================================================================
//
// Endpoints:
// - GET   /api/campaigns/:id - Fetch a campaign from the backend store
// - PATCH /api/campaigns/:id - Partial update; resolves accepted_count_increment
//
// ============================================================================

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::audit::AuditEventKind;
use crate::context::AppContext;
use crate::error::AppError;
use crate::gateway;

/// GET /api/campaigns/:id
/// Passthrough read against the backend store
pub async fn fetch_campaign(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match ctx.store.fetch("campaigns", &id).await {
        Ok(campaign) => Ok(Json(campaign)),
        Err(err) => {
            ctx.audit
                .record(
                    AuditEventKind::UpstreamReadFailed,
                    Some(format!("campaign:{id}")),
                    Some(err.to_string()),
                )
                .await;
            Err(AppError::upstream_read("Failed to fetch campaign", err.to_string()))
        }
    }
}

/// PATCH /api/campaigns/:id
///
/// A body carrying `accepted_count_increment` is resolved into an absolute
/// `accepted_count` before the write; anything else forwards as-is.
pub async fn update_campaign(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    match gateway::apply_partial_update(ctx.store.as_ref(), "campaigns", &id, payload).await {
        Ok(updated) => Ok(Json(updated)),
        Err(err) => Err(super::fail_partial_update(
            &ctx,
            "campaign",
            &id,
            err,
            "Failed to update campaign",
        )
        .await),
    }
}
