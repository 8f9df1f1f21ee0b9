//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed compilation request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The requested model is not the supported one
    #[error("Model '{0}' is not yet available")]
    UnsupportedModel(String),

    /// Compiler error
    #[error("Compiler error: {0}")]
    CompileError(#[from] promptos_compiler::CompileError),

    /// External generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(#[from] promptos_llm::LLMError),

    /// Generic SDK error
    #[error("SDK error: {0}")]
    GenericError(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

impl SdkError {
    /// Whether this error belongs to the synchronous validation class
    /// (reported before any provider call is made)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SdkError::InvalidRequest(_)
                | SdkError::UnsupportedModel(_)
                | SdkError::CompileError(_)
        )
    }
}
