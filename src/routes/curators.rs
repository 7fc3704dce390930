// ============================================================================
// Curator Routes
// ============================================================================
//
// Endpoints:
// - GET   /api/curators/:id - Fetch a curator from the backend store
// - PATCH /api/curators/me  - Partial update for the session's curator;
//                             resolves credits_increment / accepted_increment
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
use crate::routes::extractors::AuthenticatedCurator;

/// GET /api/curators/:id
/// Passthrough read against the backend store
pub async fn fetch_curator(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match ctx.store.fetch("curators", &id).await {
        Ok(curator) => Ok(Json(curator)),
        Err(err) => {
            ctx.audit
                .record(
                    AuditEventKind::UpstreamReadFailed,
                    Some(format!("curator:{id}")),
                    Some(err.to_string()),
                )
                .await;
            Err(AppError::upstream_read("Failed to fetch curator", err.to_string()))
        }
    }
}

/// PATCH /api/curators/me
///
/// The target curator comes from the session lookup, never from the path.
/// Bodies may carry `credits_increment` and `accepted_increment` deltas,
/// resolved against the curator's current state before the write.
pub async fn update_current_curator(
    State(ctx): State<Arc<AppContext>>,
    curator: AuthenticatedCurator,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let curator_id = curator.0;

    match gateway::apply_partial_update(ctx.store.as_ref(), "curators", &curator_id, payload).await
    {
        Ok(updated) => Ok(Json(updated)),
        Err(err) => Err(super::fail_partial_update(
            &ctx,
            "curator",
            &curator_id,
            err,
            "Failed to update curator",
        )
        .await),
    }
}
