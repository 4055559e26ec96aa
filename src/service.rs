use std::sync::Arc;

use crate::archetype::FallbackGenerator;
use crate::config::ServiceConfig;
use crate::data::{BusinessIdea, FallbackReason, Generation, IdeaSource};
use crate::error::{LlmError, ProfileError};
use crate::llm::{
    build_prompt, parse_generated_ideas, AnthropicProvider, CompletionRequest, LlmProvider,
};
use crate::profile::UserProfile;

const PROBE_PROMPT: &str = "Hello";
const PROBE_MAX_TOKENS: u32 = 10;

/// Produces ideas from the upstream model when configured, and from the
/// offline templates otherwise or on any upstream failure.
pub struct IdeaRequestService {
    config: ServiceConfig,
    provider: Arc<dyn LlmProvider>,
    fallback: FallbackGenerator,
}

impl IdeaRequestService {
    pub fn new(config: ServiceConfig) -> Result<Self, LlmError> {
        let provider = Arc::new(AnthropicProvider::new(&config)?);
        Ok(Self::with_provider(config, provider))
    }

    pub fn with_provider(config: ServiceConfig, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            config,
            provider,
            fallback: FallbackGenerator::new(),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Never fails on upstream problems. The only error is an incomplete
    /// profile, reported before any network I/O.
    pub async fn generate(&self, profile: &UserProfile) -> Result<Generation, ProfileError> {
        profile.validate()?;

        if !self.config.is_configured() {
            tracing::info!("No API credential configured, using template ideas");
            return self.fallback_generation(profile, FallbackReason::NotConfigured);
        }

        match self.request_ideas(profile).await {
            Ok(ideas) => {
                tracing::info!(
                    count = ideas.len(),
                    model = %self.config.model,
                    "Generated ideas upstream"
                );
                Ok(Generation::new(ideas, IdeaSource::Ai))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Upstream generation failed, using template ideas");
                self.fallback_generation(profile, FallbackReason::Upstream(err.to_string()))
            }
        }
    }

    async fn request_ideas(&self, profile: &UserProfile) -> Result<Vec<BusinessIdea>, LlmError> {
        let request = CompletionRequest {
            prompt: build_prompt(profile, self.config.idea_count),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        };

        let text = self.provider.complete(request).await?;
        tracing::debug!(chars = text.len(), "Received model output");
        parse_generated_ideas(&text)
    }

    fn fallback_generation(
        &self,
        profile: &UserProfile,
        reason: FallbackReason,
    ) -> Result<Generation, ProfileError> {
        let ideas = self.fallback.generate(profile)?;
        Ok(Generation::new(ideas, IdeaSource::Fallback(reason)))
    }

    /// Cheap round trip to check the credential and endpoint. Any 2xx reply
    /// passes; the body is not parsed.
    pub async fn test_connection(&self) -> bool {
        if !self.config.is_configured() {
            return false;
        }

        let request = CompletionRequest {
            prompt: PROBE_PROMPT.to_string(),
            max_tokens: PROBE_MAX_TOKENS,
            temperature: None,
        };

        match self.provider.ping(request).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Connection test failed");
                false
            }
        }
    }
}
