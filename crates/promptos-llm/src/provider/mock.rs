//! Mock LLM provider for testing

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::Result;
use crate::provider::LLMProvider;
use async_trait::async_trait;

/// Mock LLM provider for testing
pub struct MockProvider {
    name: String,
    default_response: String,
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            default_response: "Mock LLM response".to_string(),
        }
    }

    /// Create with custom default response
    pub fn with_response(response: String) -> Self {
        Self {
            name: "mock".to_string(),
            default_response: response,
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let response = LLMResponse::new(self.default_response.clone(), request.model)
            .with_tokens(10)
            .with_finish_reason("stop".to_string());

        Ok(response)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl LLMProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "Mock"
    }
}
