use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Credential value shipped in sample env files; treated as unset.
pub const PLACEHOLDER_API_KEY: &str = "your_claude_api_key_here";

/// Settings for the upstream text-generation call. Built once at startup and
/// handed to `IdeaRequestService`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default, skip_serializing)]
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub api_version: String,
    pub max_tokens: u32,
    /// Moderate; favors diversity over determinism.
    pub temperature: f32,
    pub timeout: Duration,
    pub idea_count: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            max_tokens: 4000,
            temperature: 0.7,
            timeout: Duration::from_secs(30),
            idea_count: 4,
        }
    }
}

impl ServiceConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// A blank or placeholder credential means the service runs offline.
    pub fn is_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }
}
