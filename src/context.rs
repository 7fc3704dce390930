use crate::audit::AuditTrail;
use crate::config::Config;
use crate::feedback::FeedbackSink;
use crate::session::CurrentUserProvider;
use crate::store::RemoteStore;
use std::sync::Arc;

/// Application context containing shared dependencies
/// This reduces parameter passing and makes it easier to add new dependencies
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn RemoteStore>,
    pub sessions: Arc<dyn CurrentUserProvider>,
    pub feedback: Arc<dyn FeedbackSink>,
    pub audit: Arc<AuditTrail>,
    pub config: Arc<Config>,
}

impl AppContext {
    /// Creates a new application context
    pub fn new(
        store: Arc<dyn RemoteStore>,
        sessions: Arc<dyn CurrentUserProvider>,
        feedback: Arc<dyn FeedbackSink>,
        audit: Arc<AuditTrail>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            store,
            sessions,
            feedback,
            audit,
            config,
        }
    }
}
