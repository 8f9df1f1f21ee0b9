//! Compilation result type

use crate::ast::PromptAst;
use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};

/// The assembled output of one compilation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationResult {
    /// Behavior-setting instruction for the downstream assistant
    pub system_prompt: String,
    /// Task-carrying directive for the downstream assistant
    pub user_prompt: String,
    pub ast: PromptAst,
    pub metrics: Metrics,
}
