//! AST builder
//!
//! Converts raw text plus its classification into a [`PromptAst`]. Pure and
//! deterministic apart from the wall-clock timestamp in `meta`.

use chrono::Utc;
use promptos_core::{AstContent, AstMeta, AstStructure, IntentAnalysis, PromptAst};

/// Build the structural tree for a classified intent
pub fn build_ast(input: &str, analysis: &IntentAnalysis) -> PromptAst {
    let sentences = input
        .split('.')
        .filter(|segment| !segment.trim().is_empty())
        .count();
    let words = input.split_whitespace().count();
    let tokens = input.chars().count().div_ceil(4);

    PromptAst {
        node_type: PromptAst::NODE_TYPE.to_string(),
        meta: AstMeta {
            domain: analysis.domain,
            task_type: analysis.task_type,
            output_format: analysis.output_format,
            timestamp: Utc::now().to_rfc3339(),
        },
        content: AstContent {
            input: input.to_string(),
            constraints: analysis.constraints.clone(),
            complexity: analysis.complexity,
        },
        structure: AstStructure {
            sentences,
            words,
            tokens,
        },
    }
}
