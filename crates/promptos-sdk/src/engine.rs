//! Core PromptCompiler implementation

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::prompts::build_optimization_prompt;
use crate::types::{CompileRequest, CompileResponse};
use chrono::Utc;
use promptos_compiler::{analyze_intent, build_ast, calculate_metrics, MetricsInput};
use promptos_core::CompilationResult;
use promptos_llm::{extract_system_prompt, extract_user_prompt, LLMClient, LLMRequest};
use std::sync::Arc;
use tracing::{debug, info};

/// The compilation pipeline orchestrator
///
/// Sequences classifier, AST builder, the external generation call, response
/// extraction, and metrics computation. One instance serves many requests;
/// all state is immutable configuration plus the provider client.
pub struct PromptCompiler {
    client: Arc<dyn LLMClient>,
    config: EngineConfig,
}

impl PromptCompiler {
    /// Create a new compiler
    pub fn new(client: Arc<dyn LLMClient>, config: EngineConfig) -> Self {
        Self { client, config }
    }

    /// Create with default configuration
    pub fn with_defaults(client: Arc<dyn LLMClient>) -> Self {
        Self {
            client,
            config: EngineConfig::default(),
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compile an intent through the full provider-backed pipeline
    ///
    /// Validation failures are reported synchronously; no provider call is
    /// made for them. A provider failure is terminal for the whole
    /// compilation: no retry, no partial result. After a successful provider
    /// response the remaining stages are total and cannot fail.
    pub async fn compile(&self, request: CompileRequest) -> Result<CompileResponse> {
        if request.code.trim().is_empty() {
            return Err(SdkError::InvalidRequest("Code is required".to_string()));
        }
        if request.model != self.config.model_id {
            return Err(SdkError::UnsupportedModel(request.model));
        }

        // Classification and AST construction are prerequisites of the
        // provider call, never concurrent with it.
        let analysis = analyze_intent(&request.code);
        let ast = build_ast(&request.code, &analysis);

        debug!(
            domain = %analysis.domain,
            task_type = %analysis.task_type,
            constraints = analysis.constraints.len(),
            "intent classified"
        );

        let instruction = build_optimization_prompt(&analysis);
        let llm_request = LLMRequest::new(instruction, self.config.provider_model.clone())
            .with_generation_config(self.config.generation);

        // The single suspension point of the pipeline.
        let response = self.client.call(llm_request).await?;

        let system_prompt = extract_system_prompt(&response.content);
        let user_prompt = extract_user_prompt(&response.content, &request.code);

        let metrics = calculate_metrics(MetricsInput {
            text: &request.code,
            constraint_count: analysis.constraints.len(),
            ast_depth: ast.depth(),
        });

        info!(
            model = %request.model,
            estimated_tokens = metrics.estimated_tokens,
            reliability = metrics.reliability_score,
            "compilation finished"
        );

        Ok(CompileResponse {
            system_prompt,
            user_prompt,
            ast,
            metrics,
            model: request.model,
            compiled_at: Utc::now(),
        })
    }

    /// Compile an intent locally, without the provider call
    ///
    /// Uses the synthesizer's fixed prompt tables instead of provider
    /// output; useful for previews and offline use.
    pub fn compile_offline(&self, input: &str) -> Result<CompilationResult> {
        Ok(promptos_compiler::compile(input)?)
    }
}
