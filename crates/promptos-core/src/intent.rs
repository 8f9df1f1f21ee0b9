//! Intent classification labels
//!
//! Every axis resolves to a value from a fixed enumeration. Unclassifiable
//! input falls back to the `General`/`Text` defaults rather than failing.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subject-area classification of an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    DataAnalysis,
    CodeGeneration,
    CreativeWriting,
    QaAssistant,
    Language,
    Design,
    #[default]
    General,
}

impl Domain {
    /// The wire label for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::DataAnalysis => "data-analysis",
            Domain::CodeGeneration => "code-generation",
            Domain::CreativeWriting => "creative-writing",
            Domain::QaAssistant => "qa-assistant",
            Domain::Language => "language",
            Domain::Design => "design",
            Domain::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data-analysis" => Ok(Domain::DataAnalysis),
            "code-generation" => Ok(Domain::CodeGeneration),
            "creative-writing" => Ok(Domain::CreativeWriting),
            "qa-assistant" => Ok(Domain::QaAssistant),
            "language" => Ok(Domain::Language),
            "design" => Ok(Domain::Design),
            "general" => Ok(Domain::General),
            other => Err(CoreError::InvalidValue(format!("unknown domain: {other}"))),
        }
    }
}

/// Action-verb classification of an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskType {
    Summarization,
    Transformation,
    Generation,
    Analysis,
    Explanation,
    #[default]
    General,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Summarization => "summarization",
            TaskType::Transformation => "transformation",
            TaskType::Generation => "generation",
            TaskType::Analysis => "analysis",
            TaskType::Explanation => "explanation",
            TaskType::General => "general",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summarization" => Ok(TaskType::Summarization),
            "transformation" => Ok(TaskType::Transformation),
            "generation" => Ok(TaskType::Generation),
            "analysis" => Ok(TaskType::Analysis),
            "explanation" => Ok(TaskType::Explanation),
            "general" => Ok(TaskType::General),
            other => Err(CoreError::InvalidValue(format!("unknown task type: {other}"))),
        }
    }
}

/// Desired response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Table,
    Code,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Table => "table",
            OutputFormat::Code => "code",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            "table" => Ok(OutputFormat::Table),
            "code" => Ok(OutputFormat::Code),
            other => Err(CoreError::InvalidValue(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

/// A constraint label extracted from the intent text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Constraint {
    Brevity,
    Detail,
    StructuredOutput,
    Formatting,
}

impl Constraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Constraint::Brevity => "brevity",
            Constraint::Detail => "detail",
            Constraint::StructuredOutput => "structured-output",
            Constraint::Formatting => "formatting",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a raw intent text
///
/// Created once per compilation request and immutable afterwards. The
/// constraint list keeps checklist order and never contains duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentAnalysis {
    pub domain: Domain,
    pub task_type: TaskType,
    pub constraints: Vec<Constraint>,
    pub output_format: OutputFormat,
    /// Heuristic difficulty indicator, 0-100
    pub complexity: u8,
}

impl IntentAnalysis {
    /// Check whether a constraint was extracted
    pub fn has_constraint(&self, constraint: Constraint) -> bool {
        self.constraints.contains(&constraint)
    }

    /// Comma-joined constraint labels in checklist order
    pub fn constraint_labels(&self) -> String {
        self.constraints
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
