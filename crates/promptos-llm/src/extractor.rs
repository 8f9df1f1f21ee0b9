//! Prompt extraction from unstructured provider output
//!
//! Two independent pattern passes over the same source text: one for a
//! system-prompt section, one for a user-prompt section. Each pass has a
//! total fallback, so extraction never fails. The captured regions are not
//! guaranteed to be disjoint.

use regex::Regex;
use std::sync::LazyLock;

static SYSTEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:system prompt|system instructions?)[:\n]+(.*?)(?:\n\n|user|$)").unwrap()
});

static USER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:user prompt|user input|user message)[:\n]+(.*?)(?:\n\n|$)").unwrap()
});

/// Extract the system-prompt section from provider output
///
/// Looks for a "System Prompt" / "System Instructions" header and captures
/// up to the next blank line, a "User" label, or end of text. Without a
/// recognizable header the fallback is the text before the first blank-line
/// boundary, or the whole text if none exists.
pub fn extract_system_prompt(response: &str) -> String {
    if let Some(content) = capture(&SYSTEM_PATTERN, response) {
        return content;
    }

    match response.split("\n\n").next() {
        Some(first) if !first.is_empty() => first.to_string(),
        _ => response.to_string(),
    }
}

/// Extract the user-prompt section from provider output
///
/// Looks for a "User Prompt" / "User Input" / "User Message" header under
/// the same capture rule. Without one, the original raw input is returned —
/// not the provider text.
pub fn extract_user_prompt(response: &str, original_input: &str) -> String {
    if let Some(content) = capture(&USER_PATTERN, response) {
        return content;
    }

    original_input.to_string()
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    let captured = pattern.captures(text)?.get(1)?;
    let trimmed = captured.as_str().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
