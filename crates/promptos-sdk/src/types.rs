//! Request and response types for the compilation pipeline

use chrono::{DateTime, Utc};
use promptos_core::{Metrics, PromptAst};
use serde::{Deserialize, Serialize};

/// Inbound compilation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileRequest {
    /// Raw intent text to compile; required and non-empty
    pub code: String,

    /// Model identifier; must equal the configured supported identifier
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "gemini".to_string()
}

impl CompileRequest {
    /// Create a request for the default model
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            model: default_model(),
        }
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Outbound compilation response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResponse {
    pub system_prompt: String,
    pub user_prompt: String,
    pub ast: PromptAst,
    pub metrics: Metrics,
    pub model: String,
    pub compiled_at: DateTime<Utc>,
}
