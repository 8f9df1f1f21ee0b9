//! PromptOS LLM Integration
//!
//! This crate provides the external text-generation integration for the
//! PromptOS compiler:
//! - A provider-agnostic async client trait with request/response types
//! - The Gemini provider implementation
//! - A deterministic mock provider for tests
//! - Extraction of system/user prompt sections from unstructured provider
//!   output
//!
//! **Note**: provider calls have multi-second latency. The pure compilation
//! stages never depend on this crate; only the orchestrator awaits it.

// Re-export core types
pub use cache::{InMemoryLLMCache, LLMCache};
pub use client::{GenerationConfig, LLMClient, LLMRequest, LLMResponse};
pub use error::{LLMError, Result};
pub use extractor::{extract_system_prompt, extract_user_prompt};

// Re-export providers
pub use provider::{GeminiProvider, LLMProvider, MockProvider};

pub mod cache;
pub mod client;
pub mod error;
pub mod extractor;
pub mod provider;
