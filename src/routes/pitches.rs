// ============================================================================
// Pitch Routes
// ============================================================================
//
// Endpoints:
// - POST  /api/pitches     - Create a pitch
// - GET   /api/pitches/:id - Fetch a pitch
// - PATCH /api/pitches/:id - Update a pitch
//
// All three are straight passthroughs. Pitch updates carry no increment
// semantics: bodies forward to the store untouched.
//
// ============================================================================

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::Value;
use std::sync::Arc;

use crate::audit::AuditEventKind;
use crate::context::AppContext;
use crate::error::AppError;

/// POST /api/pitches
pub async fn create_pitch(
    State(ctx): State<Arc<AppContext>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    match ctx.store.create("pitches", payload).await {
        Ok(created) => Ok(Json(created)),
        Err(err) => {
            ctx.audit
                .record(
                    AuditEventKind::UpstreamWriteFailed,
                    Some("pitch:new".to_string()),
                    Some(err.to_string()),
                )
                .await;
            Err(AppError::upstream_write("Failed to create pitch", err.to_string()))
        }
    }
}

/// GET /api/pitches/:id
pub async fn fetch_pitch(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match ctx.store.fetch("pitches", &id).await {
        Ok(pitch) => Ok(Json(pitch)),
        Err(err) => {
            ctx.audit
                .record(
                    AuditEventKind::UpstreamReadFailed,
                    Some(format!("pitch:{id}")),
                    Some(err.to_string()),
                )
                .await;
            Err(AppError::upstream_read("Failed to fetch pitch", err.to_string()))
        }
    }
}

/// PATCH /api/pitches/:id
pub async fn update_pitch(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    match ctx.store.update("pitches", &id, payload).await {
        Ok(updated) => Ok(Json(updated)),
        Err(err) => {
            ctx.audit
                .record(
                    AuditEventKind::UpstreamWriteFailed,
                    Some(format!("pitch:{id}")),
                    Some(err.to_string()),
                )
                .await;
            Err(AppError::upstream_write("Failed to update pitch", err.to_string()))
        }
    }
}
