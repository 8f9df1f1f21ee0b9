//! Intent classifier
//!
//! Pattern-matches raw intent text into domain, task type, output format,
//! and constraint labels. Classification is a pure function of its input:
//! ordered pattern tables, first match wins, fixed defaults on no match.

use promptos_core::{Constraint, Domain, IntentAnalysis, OutputFormat, TaskType};
use regex::Regex;
use std::sync::LazyLock;

/// Domain patterns in declaration order; the first match wins.
static DOMAIN_PATTERNS: LazyLock<Vec<(Regex, Domain)>> = LazyLock::new(|| {
    vec![
        (pattern("data|analysis|chart|graph|plot"), Domain::DataAnalysis),
        (
            pattern("code|program|function|algorithm"),
            Domain::CodeGeneration,
        ),
        (
            pattern("story|creative|write|compose"),
            Domain::CreativeWriting,
        ),
        (pattern("question|answer|faq|help"), Domain::QaAssistant),
        (pattern("translate|language|grammar"), Domain::Language),
        (pattern("image|visual|design|ui|ux"), Domain::Design),
    ]
});

/// Task-type patterns in declaration order; the first match wins.
static TASK_PATTERNS: LazyLock<Vec<(Regex, TaskType)>> = LazyLock::new(|| {
    vec![
        (
            pattern("summarize|summary|condense"),
            TaskType::Summarization,
        ),
        (pattern("translate|convert"), TaskType::Transformation),
        (pattern("generate|create|write|compose"), TaskType::Generation),
        (pattern("analyze|evaluate|assess"), TaskType::Analysis),
        (pattern("answer|explain|describe"), TaskType::Explanation),
    ]
});

fn pattern(alternatives: &str) -> Regex {
    Regex::new(&format!("(?i){alternatives}")).unwrap()
}

/// Classify raw intent text
///
/// Empty or whitespace-only input classifies to the defaults with complexity
/// zero; rejecting it is the orchestrator's responsibility, not this one.
pub fn analyze_intent(input: &str) -> IntentAnalysis {
    let lowered = input.to_lowercase();

    let domain = DOMAIN_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(input))
        .map(|(_, domain)| *domain)
        .unwrap_or_default();

    let task_type = TASK_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(input))
        .map(|(_, task)| *task)
        .unwrap_or_default();

    // Independent checklist; result keeps checklist order and cannot
    // contain duplicates.
    let mut constraints = Vec::new();
    if lowered.contains("short") || lowered.contains("brief") {
        constraints.push(Constraint::Brevity);
    }
    if lowered.contains("detailed") || lowered.contains("comprehensive") {
        constraints.push(Constraint::Detail);
    }
    if lowered.contains("json") || lowered.contains("structured") {
        constraints.push(Constraint::StructuredOutput);
    }
    if lowered.contains("markdown") || lowered.contains("format") {
        constraints.push(Constraint::Formatting);
    }

    // Sequential overwrites in fixed order; the last matching check wins.
    let mut output_format = OutputFormat::Text;
    if lowered.contains("json") {
        output_format = OutputFormat::Json;
    }
    if lowered.contains("markdown") || lowered.contains("md") {
        output_format = OutputFormat::Markdown;
    }
    if lowered.contains("table") || lowered.contains("csv") {
        output_format = OutputFormat::Table;
    }
    if lowered.contains("code") {
        output_format = OutputFormat::Code;
    }

    IntentAnalysis {
        domain,
        task_type,
        constraints,
        output_format,
        complexity: complexity_of(input),
    }
}

/// `min(100, lines*5 + questionMarks*3 + words/10)` with floor division
fn complexity_of(input: &str) -> u8 {
    let lines = input.lines().filter(|line| !line.trim().is_empty()).count();
    let questions = input.matches('?').count();
    let words = input.split_whitespace().count();

    (lines * 5 + questions * 3 + words / 10).min(100) as u8
}
