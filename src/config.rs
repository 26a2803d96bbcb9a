use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the backend gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the backend API, with a trailing slash (endpoints are appended).
    pub base_url: String,
    /// Per-request timeout. A timed-out call fails with a retryable gateway error.
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `RURAFOOD_API_URL` and optionally `RURAFOOD_TIMEOUT_SECS`.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("RURAFOOD_API_URL").ok()?;
        let mut config = Self::new(base_url);
        if let Some(secs) = std::env::var("RURAFOOD_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Some(config)
    }
}
