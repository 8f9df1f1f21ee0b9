//! PromptOS Core - Core types and definitions for the PromptOS prompt compiler
//!
//! This crate provides the fundamental types used across the PromptOS ecosystem:
//! - Intent classification labels (domain, task type, output format, constraints)
//! - The prompt AST and its structural depth walk
//! - Compilation metrics and result types
//! - Error types

pub mod ast;
pub mod compilation;
pub mod error;
pub mod intent;
pub mod metrics;

// Re-export commonly used types
pub use ast::{value_depth, AstContent, AstMeta, AstStructure, PromptAst};
pub use compilation::CompilationResult;
pub use error::CoreError;
pub use intent::{Constraint, Domain, IntentAnalysis, OutputFormat, TaskType};
pub use metrics::{clamp_score, Metrics};
