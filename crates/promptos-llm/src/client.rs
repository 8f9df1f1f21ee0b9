//! LLM client interface and types

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling configuration with the documented provider defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Temperature for sampling
    pub temperature: f32,

    /// Nucleus-sampling threshold
    pub top_p: f32,

    /// Top-k sampling cutoff
    pub top_k: u32,

    /// Maximum tokens to generate
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
        }
    }
}

/// Request to an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMRequest {
    /// The prompt to send to the LLM
    pub prompt: String,

    /// Model identifier (e.g., "gemini-2.5-flash")
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Temperature for sampling
    pub temperature: Option<f32>,

    /// Nucleus-sampling threshold
    pub top_p: Option<f32>,

    /// Top-k sampling cutoff
    pub top_k: Option<u32>,

    /// System message/instructions
    pub system: Option<String>,
}

impl LLMRequest {
    /// Create a new LLM request
    pub fn new(prompt: String, model: String) -> Self {
        Self {
            prompt,
            model,
            max_tokens: None,
            temperature: None,
            top_p: None,
            top_k: None,
            system: None,
        }
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set system message
    pub fn with_system(mut self, system: String) -> Self {
        self.system = Some(system);
        self
    }

    /// Apply a full sampling configuration
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.temperature = Some(config.temperature);
        self.top_p = Some(config.top_p);
        self.top_k = Some(config.top_k);
        self.max_tokens = Some(config.max_output_tokens);
        self
    }
}

/// Response from an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// The generated text
    pub content: String,

    /// Model that generated the response
    pub model: String,

    /// Number of tokens used
    pub tokens_used: u32,

    /// Finish reason (e.g., "stop", "length")
    pub finish_reason: String,
}

impl LLMResponse {
    /// Create a new LLM response
    pub fn new(content: String, model: String) -> Self {
        Self {
            content,
            model,
            tokens_used: 0,
            finish_reason: "stop".to_string(),
        }
    }

    /// Set tokens used
    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens_used = tokens;
        self
    }

    /// Set finish reason
    pub fn with_finish_reason(mut self, reason: String) -> Self {
        self.finish_reason = reason;
        self
    }
}

/// Async LLM client trait
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Call the LLM with a request for text generation
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse>;

    /// Get the name of this client
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_request_builder() {
        let request = LLMRequest::new("Test prompt".to_string(), "gemini-2.5-flash".to_string())
            .with_max_tokens(100)
            .with_temperature(0.7)
            .with_system("You are a helpful assistant".to_string());

        assert_eq!(request.prompt, "Test prompt");
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.max_tokens, Some(100));
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(
            request.system,
            Some("You are a helpful assistant".to_string())
        );
    }

    #[test]
    fn test_generation_config_defaults() {
        let config = GenerationConfig::default();

        assert_eq!(config.temperature, 1.0);
        assert_eq!(config.top_p, 0.95);
        assert_eq!(config.top_k, 64);
        assert_eq!(config.max_output_tokens, 8192);
    }

    #[test]
    fn test_request_with_generation_config() {
        let request = LLMRequest::new("Test".to_string(), "gemini-2.5-flash".to_string())
            .with_generation_config(GenerationConfig::default());

        assert_eq!(request.temperature, Some(1.0));
        assert_eq!(request.top_p, Some(0.95));
        assert_eq!(request.top_k, Some(64));
        assert_eq!(request.max_tokens, Some(8192));
    }

    #[test]
    fn test_llm_response_builder() {
        let response = LLMResponse::new("Generated text".to_string(), "gemini-2.5-flash".to_string())
            .with_tokens(50)
            .with_finish_reason("stop".to_string());

        assert_eq!(response.content, "Generated text");
        assert_eq!(response.model, "gemini-2.5-flash");
        assert_eq!(response.tokens_used, 50);
        assert_eq!(response.finish_reason, "stop");
    }
}
