//! End-to-end pipeline tests driven by deterministic provider stubs

use async_trait::async_trait;
use promptos_core::{Constraint, Domain, OutputFormat, TaskType};
use promptos_llm::{LLMClient, LLMError, LLMRequest, LLMResponse, MockProvider};
use promptos_sdk::{CompileRequest, PromptCompiler, PromptCompilerBuilder, SdkError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Client stub that counts calls and replays a scripted response
struct RecordingClient {
    calls: AtomicUsize,
    response: String,
}

impl RecordingClient {
    fn new(response: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: response.to_string(),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMClient for RecordingClient {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LLMResponse::new(self.response.clone(), request.model))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Client stub that always fails
struct FailingClient;

#[async_trait]
impl LLMClient for FailingClient {
    async fn call(&self, _request: LLMRequest) -> Result<LLMResponse, LLMError> {
        Err(LLMError::ApiCallFailed("connection refused".to_string()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn compiler_with(client: Arc<dyn LLMClient>) -> PromptCompiler {
    PromptCompiler::with_defaults(client)
}

#[tokio::test]
async fn test_compile_extracts_labelled_sections() {
    let scripted = "System Prompt:\nYou are a precise code generator.\n\nUser Prompt:\nImplement the validator.\n";
    let compiler = compiler_with(Arc::new(MockProvider::with_response(scripted.to_string())));

    let response = compiler
        .compile(CompileRequest::new(
            "Write a short function that validates email addresses",
        ))
        .await
        .unwrap();

    assert_eq!(response.system_prompt, "You are a precise code generator.");
    assert_eq!(response.user_prompt, "Implement the validator.");
    assert_eq!(response.model, "gemini");
}

#[tokio::test]
async fn test_compile_classifies_and_measures() {
    let compiler = compiler_with(Arc::new(MockProvider::new()));

    let code = "Write a short function that validates email addresses";
    let response = compiler.compile(CompileRequest::new(code)).await.unwrap();

    assert_eq!(response.ast.meta.domain, Domain::CodeGeneration);
    assert_eq!(response.ast.meta.task_type, TaskType::Generation);
    assert_eq!(response.ast.meta.output_format, OutputFormat::Text);
    assert!(response
        .ast
        .content
        .constraints
        .contains(&Constraint::Brevity));

    // 8 words -> ceil(8 * 1.3) = 11 tokens
    assert_eq!(response.metrics.estimated_tokens, 11);
    assert!(response.metrics.reliability_score <= 100);
    assert!(response.metrics.complexity_score <= 100);
}

#[tokio::test]
async fn test_compile_falls_back_without_headers() {
    let scripted = "Here is an improved framing of the task.\n\nMore elaboration follows here.";
    let compiler = compiler_with(Arc::new(MockProvider::with_response(scripted.to_string())));

    let code = "Summarize the incident report";
    let response = compiler.compile(CompileRequest::new(code)).await.unwrap();

    // System prompt falls back to the first paragraph of the provider text;
    // user prompt falls back to the original input.
    assert_eq!(
        response.system_prompt,
        "Here is an improved framing of the task."
    );
    assert_eq!(response.user_prompt, code);
}

#[tokio::test]
async fn test_empty_code_is_rejected_before_the_provider() {
    let client = Arc::new(RecordingClient::new("unused"));
    let compiler = compiler_with(client.clone());

    let err = compiler
        .compile(CompileRequest::new("   \n  "))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::InvalidRequest(_)));
    assert!(err.is_validation());
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_unsupported_model_is_rejected_before_the_provider() {
    let client = Arc::new(RecordingClient::new("unused"));
    let compiler = compiler_with(client.clone());

    let err = compiler
        .compile(CompileRequest::new("Summarize this").with_model("claude-3"))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::UnsupportedModel(_)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_provider_failure_is_terminal() {
    let compiler = compiler_with(Arc::new(FailingClient));

    let err = compiler
        .compile(CompileRequest::new("Summarize this report"))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::GenerationFailed(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_provider_receives_generation_defaults() {
    struct AssertingClient;

    #[async_trait]
    impl LLMClient for AssertingClient {
        async fn call(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
            assert_eq!(request.model, "gemini-2.5-flash");
            assert_eq!(request.temperature, Some(1.0));
            assert_eq!(request.top_p, Some(0.95));
            assert_eq!(request.top_k, Some(64));
            assert_eq!(request.max_tokens, Some(8192));
            assert!(request.prompt.contains("expert prompt engineer"));
            assert!(request.prompt.contains("Domain: general"));
            Ok(LLMResponse::new("ok".to_string(), request.model))
        }

        fn name(&self) -> &str {
            "asserting"
        }
    }

    let compiler = compiler_with(Arc::new(AssertingClient));
    compiler
        .compile(CompileRequest::new("hello there world"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_offline_compile_uses_the_synthesizer() {
    let compiler = PromptCompilerBuilder::new()
        .with_client(Arc::new(MockProvider::new()))
        .build()
        .unwrap();

    let result = compiler
        .compile_offline("Write a short function that validates email addresses")
        .unwrap();

    assert!(result.system_prompt.contains("expert programmer"));
    assert!(result.user_prompt.contains("Constraints: brevity"));

    let err = compiler.compile_offline("").unwrap_err();
    assert!(matches!(err, SdkError::CompileError(_)));
}

#[tokio::test]
async fn test_compile_is_idempotent_apart_from_timestamps() {
    let compiler = compiler_with(Arc::new(MockProvider::new()));
    let request = CompileRequest::new("Analyze this dataset and chart the trend");

    let a = compiler.compile(request.clone()).await.unwrap();
    let b = compiler.compile(request).await.unwrap();

    assert_eq!(a.system_prompt, b.system_prompt);
    assert_eq!(a.user_prompt, b.user_prompt);
    assert_eq!(a.metrics, b.metrics);
    assert_eq!(a.ast.meta.domain, b.ast.meta.domain);
    assert_eq!(a.ast.structure, b.ast.structure);
}
