//! Prompt synthesizer
//!
//! Maps a classified intent to a canonical system prompt and augments the raw
//! input into a user prompt. Pure function, no randomness.

use promptos_core::{Domain, IntentAnalysis, OutputFormat};

/// The synthesized system/user prompt pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Synthesize the prompt pair for a classified intent
///
/// The user prompt starts as the raw input and receives two order-fixed
/// suffix appends: a format directive when the output format is not plain
/// text, then a constraint directive when any constraints were extracted.
pub fn synthesize_prompts(input: &str, analysis: &IntentAnalysis) -> PromptPair {
    let mut user_prompt = input.to_string();

    if analysis.output_format != OutputFormat::Text {
        user_prompt.push_str(&format!(
            "\n\nPlease format your response as {}.",
            analysis.output_format
        ));
    }
    if !analysis.constraints.is_empty() {
        user_prompt.push_str(&format!("\n\nConstraints: {}.", analysis.constraint_labels()));
    }

    PromptPair {
        system_prompt: system_prompt_for(analysis.domain).to_string(),
        user_prompt,
    }
}

/// Fixed per-domain instruction table; `General` is the lookup-miss fallback.
fn system_prompt_for(domain: Domain) -> &'static str {
    match domain {
        Domain::DataAnalysis => {
            "You are an expert data analyst. Provide clear, actionable insights with supporting evidence."
        }
        Domain::CodeGeneration => {
            "You are an expert programmer. Generate clean, efficient, well-commented code."
        }
        Domain::CreativeWriting => {
            "You are a creative writer. Produce engaging, original, and thoughtful content."
        }
        Domain::QaAssistant => {
            "You are a helpful assistant. Answer questions accurately and comprehensively."
        }
        Domain::Language => {
            "You are a language expert. Provide grammatically correct and natural language outputs."
        }
        Domain::Design => {
            "You are a design expert. Provide creative and practical design recommendations."
        }
        Domain::General => "You are a helpful assistant. Provide accurate and useful responses.",
    }
}
