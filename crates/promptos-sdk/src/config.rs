//! Configuration types for the PromptCompiler

use promptos_llm::GenerationConfig;
use serde::{Deserialize, Serialize};

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The single request-level model identifier the pipeline accepts
    pub model_id: String,

    /// Provider-level model passed to the generation API
    pub provider_model: String,

    /// Sampling defaults for the provider call
    pub generation: GenerationConfig,
}

impl EngineConfig {
    /// Create a new engine configuration with the supported defaults
    pub fn new() -> Self {
        Self {
            model_id: "gemini".to_string(),
            provider_model: "gemini-2.5-flash".to_string(),
            generation: GenerationConfig::default(),
        }
    }

    /// Set the accepted model identifier
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Set the provider-level model
    pub fn with_provider_model(mut self, provider_model: impl Into<String>) -> Self {
        self.provider_model = provider_model.into();
        self
    }

    /// Set the sampling configuration
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::new();

        assert_eq!(config.model_id, "gemini");
        assert_eq!(config.provider_model, "gemini-2.5-flash");
        assert_eq!(config.generation.temperature, 1.0);
        assert_eq!(config.generation.max_output_tokens, 8192);
    }

    #[test]
    fn test_builder_methods() {
        let config = EngineConfig::new()
            .with_model_id("mock")
            .with_provider_model("mock-model");

        assert_eq!(config.model_id, "mock");
        assert_eq!(config.provider_model, "mock-model");
    }
}
