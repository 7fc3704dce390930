// ============================================================================
// Admin Routes
// ============================================================================
//
// Endpoints:
// - GET /admin/audit - Recent gateway audit events, oldest first
//
// ============================================================================

use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::context::AppContext;

/// GET /admin/audit
pub async fn recent_audit_events(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    Json(ctx.audit.recent().await)
}
