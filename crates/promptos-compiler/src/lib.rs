//! PromptOS Compiler - Intent analysis and prompt compilation stages
//!
//! The pure half of the PromptOS pipeline: classify raw intent text, build
//! its structural tree, synthesize the prompt pair, and compute metrics.
//! Everything here is deterministic and side-effect free apart from the AST
//! timestamp; the provider-backed orchestration lives in `promptos-sdk`.

pub mod analyzer;
pub mod ast_builder;
pub mod error;
pub mod metrics;
pub mod synthesizer;

pub use analyzer::analyze_intent;
pub use ast_builder::build_ast;
pub use error::{CompileError, Result};
pub use metrics::{calculate_metrics, MetricsInput, COST_PER_TOKEN};
pub use synthesizer::{synthesize_prompts, PromptPair};

use promptos_core::CompilationResult;

/// Run the full offline compilation pipeline
///
/// Sequences classifier, synthesizer, AST builder, and metrics calculator
/// without any provider call. Rejects empty input; every later stage is a
/// total function.
pub fn compile(input: &str) -> Result<CompilationResult> {
    if input.trim().is_empty() {
        return Err(CompileError::EmptyInput);
    }

    let analysis = analyze_intent(input);
    let prompts = synthesize_prompts(input, &analysis);
    let ast = build_ast(input, &analysis);
    let metrics = calculate_metrics(MetricsInput {
        text: input,
        constraint_count: analysis.constraints.len(),
        ast_depth: ast.depth(),
    });

    Ok(CompilationResult {
        system_prompt: prompts.system_prompt,
        user_prompt: prompts.user_prompt,
        ast,
        metrics,
    })
}
