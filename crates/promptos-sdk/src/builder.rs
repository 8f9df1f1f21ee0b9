//! Builder pattern for PromptCompiler

use crate::config::EngineConfig;
use crate::engine::PromptCompiler;
use crate::error::{Result, SdkError};
use promptos_llm::{GeminiProvider, LLMClient};
use std::sync::Arc;

/// Builder for [`PromptCompiler`]
///
/// # Example
///
/// ```rust,ignore
/// use promptos_sdk::PromptCompilerBuilder;
///
/// // Against the live provider
/// let compiler = PromptCompilerBuilder::new()
///     .with_gemini_api_key(std::env::var("GEMINI_API_KEY")?)
///     .build()?;
///
/// // Against any client (e.g. a mock in tests)
/// let compiler = PromptCompilerBuilder::new()
///     .with_client(Arc::new(MockProvider::new()))
///     .build()?;
/// ```
pub struct PromptCompilerBuilder {
    config: EngineConfig,
    client: Option<Arc<dyn LLMClient>>,
    gemini_api_key: Option<String>,
}

impl PromptCompilerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            client: None,
            gemini_api_key: None,
        }
    }

    /// Set the engine configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an already-constructed provider client
    pub fn with_client(mut self, client: Arc<dyn LLMClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Construct a Gemini provider from an API key
    pub fn with_gemini_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(api_key.into());
        self
    }

    /// Build the compiler
    ///
    /// An explicit client takes precedence over an API key. With neither,
    /// building fails with a configuration error.
    pub fn build(self) -> Result<PromptCompiler> {
        let client: Arc<dyn LLMClient> = match (self.client, self.gemini_api_key) {
            (Some(client), _) => client,
            (None, Some(api_key)) => Arc::new(GeminiProvider::new(api_key)),
            (None, None) => {
                return Err(SdkError::ConfigError(
                    "No provider configured: set a client or a Gemini API key".to_string(),
                ))
            }
        };

        Ok(PromptCompiler::new(client, self.config))
    }
}

impl Default for PromptCompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
