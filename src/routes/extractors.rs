// ============================================================================
// Axum Extractors
// ============================================================================
//
// AuthenticatedCurator: resolves the request's bearer token to a curator
// through the injected session provider. Requests without a resolvable
// identity are rejected with 401 and recorded on the audit trail.
//
// ============================================================================

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::audit::AuditEventKind;
use crate::context::AppContext;
use crate::error::AppError;

/// Extractor for the curator bound to the request's session token.
///
/// Usage:
/// ```ignore
/// async fn handler(curator: AuthenticatedCurator, ...) -> Result<...> {
///     let curator_id = curator.0;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedCurator(pub String);

#[async_trait]
impl FromRequestParts<Arc<AppContext>> for AuthenticatedCurator {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppContext>,
    ) -> Result<Self, Self::Rejection> {
        // Extract token (format: "Bearer <token>")
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_owned);

        let Some(token) = token else {
            return Err(reject(state, "Missing Authorization header").await);
        };

        match state.sessions.current_curator(&token).await {
            Some(curator_id) => Ok(AuthenticatedCurator(curator_id)),
            None => Err(reject(state, "Session did not resolve to a curator").await),
        }
    }
}

async fn reject(ctx: &Arc<AppContext>, detail: &str) -> Response {
    tracing::warn!(detail = %detail, "Rejecting unauthenticated request");
    ctx.audit
        .record(AuditEventKind::SessionRejected, None, Some(detail.to_string()))
        .await;

    AppError::auth("No resolvable session").into_response()
}
