// ============================================================================
// Axum Routes Module
// ============================================================================
//
// Structure:
// - mod.rs: Main router assembly and middleware layering
// - campaigns.rs: Campaign fetch and partial update (increment-aware)
// - curators.rs: Curator fetch and session-scoped partial update
// - pitches.rs: Pitch CRUD passthrough
// - feedback.rs: Feedback submission
// - admin.rs: Audit trail inspection
// - health.rs: Health check and metrics endpoints
// - extractors.rs: AuthenticatedCurator extractor
// - middleware.rs: Request logging, security headers
//
// ============================================================================

mod admin;
mod campaigns;
mod curators;
mod extractors;
mod feedback;
mod health;
mod middleware;
mod pitches;

use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::audit::AuditEventKind;
use crate::context::AppContext;
use crate::error::AppError;
use crate::gateway::GatewayError;

/// Create the main application router with all routes
pub fn create_router(app_context: Arc<AppContext>) -> Router {
    Router::new()
        // Health and monitoring
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics))
        // Audit trail inspection
        .route("/admin/audit", get(admin::recent_audit_events))
        // Campaigns
        .route(
            "/api/campaigns/:id",
            get(campaigns::fetch_campaign).patch(campaigns::update_campaign),
        )
        // Curators ("me" resolves through the session lookup)
        .route("/api/curators/me", patch(curators::update_current_curator))
        .route("/api/curators/:id", get(curators::fetch_curator))
        // Pitches
        .route("/api/pitches", post(pitches::create_pitch))
        .route(
            "/api/pitches/:id",
            get(pitches::fetch_pitch).patch(pitches::update_pitch),
        )
        // Feedback
        .route("/api/feedback", post(feedback::submit_feedback))
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                // Tracing layer (outermost - runs first)
                .layer(TraceLayer::new_for_http())
                // Request logging
                .layer(axum::middleware::from_fn(middleware::request_logging))
                // Security headers
                .layer(axum::middleware::from_fn(middleware::add_security_headers))
                .into_inner(),
        )
        .with_state(app_context)
}

/// Audit a failed partial update and attach the route's fixed public
/// message for the response.
pub(crate) async fn fail_partial_update(
    ctx: &AppContext,
    entity: &str,
    id: &str,
    err: GatewayError,
    public: &'static str,
) -> AppError {
    let kind = match &err {
        GatewayError::UpstreamRead(_) => AuditEventKind::UpstreamReadFailed,
        GatewayError::UpstreamWrite(_) => AuditEventKind::UpstreamWriteFailed,
        GatewayError::InvalidPayload(_) => AuditEventKind::PayloadRejected,
    };
    ctx.audit
        .record(kind, Some(format!("{entity}:{id}")), Some(err.to_string()))
        .await;

    err.into_app_error(public)
}
