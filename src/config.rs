use anyhow::Result;

// ============================================================================
// Configuration Constants
// ============================================================================

const DEFAULT_PORT: u16 = 8080;

// Default timeouts (in seconds). These are transport-level defaults; the
// gateway itself never retries and imposes no deadline of its own.
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 10;

// The audit trail keeps only the most recent N events.
const DEFAULT_AUDIT_CAPACITY: usize = 256;

// ============================================================================
// Configuration Structures
// ============================================================================

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the backend REST store holding campaigns, curators
    /// and pitches (e.g. "https://api.crowdpitch.example")
    pub store_base_url: String,
    /// Session lookup endpoint resolving a bearer token to a curator.
    /// Defaults to "{store_base_url}/session".
    pub session_url: String,
    pub port: u16,
    pub store_timeout_secs: u64,
    pub session_timeout_secs: u64,
    pub audit_capacity: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let store_base_url = trim_trailing_slash(std::env::var("STORE_BASE_URL")?);
        let session_url = std::env::var("SESSION_URL")
            .map(trim_trailing_slash)
            .unwrap_or_else(|_| format!("{}/session", store_base_url));

        Ok(Self {
            store_base_url,
            session_url,
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            store_timeout_secs: std::env::var("STORE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_STORE_TIMEOUT_SECS),
            session_timeout_secs: std::env::var("SESSION_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TIMEOUT_SECS),
            audit_capacity: std::env::var("AUDIT_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(DEFAULT_AUDIT_CAPACITY),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn trim_trailing_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
