//! Prompt template for the optimization call

use promptos_core::IntentAnalysis;

/// Instruction sent to the provider to optimize a classified intent
pub const OPTIMIZATION_PROMPT: &str = r#"You are an expert prompt engineer. Your task is to optimize and refine user intents into clear, structured prompts.

Domain: {domain}
Task Type: {task_type}
Constraints: {constraints}

Based on this analysis, create an optimized system prompt that would guide an AI to best handle this task."#;

/// Build the optimization instruction by filling the template placeholders
pub fn build_optimization_prompt(analysis: &IntentAnalysis) -> String {
    let constraints = if analysis.constraints.is_empty() {
        "None".to_string()
    } else {
        analysis.constraint_labels()
    };

    OPTIMIZATION_PROMPT
        .replace("{domain}", analysis.domain.as_str())
        .replace("{task_type}", analysis.task_type.as_str())
        .replace("{constraints}", &constraints)
}
