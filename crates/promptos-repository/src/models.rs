//! Data models for the version storage layer

use chrono::{DateTime, Utc};
use promptos_core::Metrics;
use serde::{Deserialize, Serialize};

/// A saved prompt version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptVersion {
    /// Repository-generated identifier
    pub id: String,
    pub name: String,
    pub content: String,
    pub model: String,
    pub metrics: Option<Metrics>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when saving a version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVersion {
    pub name: String,
    pub content: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub metrics: Option<Metrics>,
}

fn default_model() -> String {
    "gemini".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_version_defaults() {
        let version: NewVersion =
            serde_json::from_str(r#"{"name": "draft", "content": "some intent"}"#).unwrap();

        assert_eq!(version.model, "gemini");
        assert!(version.metrics.is_none());
    }

    #[test]
    fn test_prompt_version_serializes_camel_case() {
        let version = PromptVersion {
            id: "v_20240101000000_abc123".to_string(),
            name: "draft".to_string(),
            content: "some intent".to_string(),
            model: "gemini".to_string(),
            metrics: None,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&version).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
