//! PromptOS Compiler SDK
//!
//! High-level API for compiling free-form intent text into an optimized
//! system/user prompt pair with structural and quality metadata.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod prompts;
pub mod types;

// Re-export main types
pub use builder::PromptCompilerBuilder;
pub use config::EngineConfig;
pub use engine::PromptCompiler;
pub use error::{Result, SdkError};
pub use types::{CompileRequest, CompileResponse};

// Re-export commonly used types from dependencies
pub use promptos_core::{CompilationResult, IntentAnalysis, Metrics, PromptAst};
pub use promptos_llm::{GenerationConfig, LLMClient};
