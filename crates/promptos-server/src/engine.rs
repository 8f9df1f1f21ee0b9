//! Prompt compiler initialization
//!
//! Thin wrapper around the SDK's builder that converts server configuration
//! into an engine instance.

use crate::config::ServerConfig;
use anyhow::Result;
use promptos_sdk::{PromptCompiler, PromptCompilerBuilder};
use tracing::info;

/// Initialize the prompt compiler
///
/// The Gemini API key comes from the `GEMINI_API_KEY` environment variable
/// (a `.env` file is honored via config loading); a missing key is a
/// bootstrap configuration error, not a per-request failure.
pub fn init_engine(_config: &ServerConfig) -> Result<PromptCompiler> {
    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| anyhow::anyhow!("Missing GEMINI_API_KEY environment variable"))?;

    let compiler = PromptCompilerBuilder::new()
        .with_gemini_api_key(api_key)
        .build()?;

    info!(
        model = %compiler.config().provider_model,
        "prompt compiler initialized"
    );

    Ok(compiler)
}
