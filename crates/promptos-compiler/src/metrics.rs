//! Metrics calculator
//!
//! Derives token, cost, reliability, and complexity numbers from text length,
//! constraint count, and AST depth. Penalties are independent and applied in
//! a fixed order; the clamp is applied once, last.

use promptos_core::{clamp_score, Metrics};

/// Per-token cost estimate, calibrated to Gemini Flash published pricing.
pub const COST_PER_TOKEN: f64 = 0.000_000_1;

const RELIABILITY_BASELINE: i64 = 85;

/// Inputs to the metrics calculation
#[derive(Debug, Clone, Copy)]
pub struct MetricsInput<'a> {
    pub text: &'a str,
    pub constraint_count: usize,
    pub ast_depth: usize,
}

/// Compute the metrics for a compiled intent
pub fn calculate_metrics(input: MetricsInput<'_>) -> Metrics {
    let word_count = input.text.split_whitespace().count();
    let estimated_tokens = (word_count as f64 * 1.3).ceil() as u64;
    let estimated_cost = round_to_precision(estimated_tokens as f64 * COST_PER_TOKEN);

    let mut reliability = RELIABILITY_BASELINE;
    if input.constraint_count > 3 {
        reliability -= 5;
    }
    if input.ast_depth > 5 {
        reliability -= 10;
    }
    // Very short text signals an under-specified intent.
    if word_count < 5 {
        reliability -= 10;
    }

    let complexity = input.ast_depth as i64 * 15 + input.constraint_count as i64 * 10;

    Metrics {
        estimated_tokens,
        estimated_cost,
        reliability_score: clamp_score(reliability),
        complexity_score: clamp_score(complexity),
    }
}

/// Round to the 8-decimal precision the cost estimate is reported at
fn round_to_precision(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str, constraint_count: usize, ast_depth: usize) -> MetricsInput<'_> {
        MetricsInput {
            text,
            constraint_count,
            ast_depth,
        }
    }

    #[test]
    fn test_token_estimate_rounds_up() {
        // 10 words * 1.3 = 13
        let metrics = calculate_metrics(input("a b c d e f g h i j", 0, 2));
        assert_eq!(metrics.estimated_tokens, 13);

        // 7 words * 1.3 = 9.1, rounds up to 10
        let metrics = calculate_metrics(input("a b c d e f g", 0, 2));
        assert_eq!(metrics.estimated_tokens, 10);
    }

    #[test]
    fn test_cost_is_tokens_times_rate() {
        let metrics = calculate_metrics(input("a b c d e f g h i j", 0, 2));
        assert!((metrics.estimated_cost - 0.0000013).abs() < 1e-12);
    }

    #[test]
    fn test_baseline_reliability() {
        let metrics = calculate_metrics(input("one two three four five", 0, 2));
        assert_eq!(metrics.reliability_score, 85);
    }

    #[test]
    fn test_penalties_are_additive() {
        // All three penalties: 85 - 5 - 10 - 10 = 60
        let metrics = calculate_metrics(input("too short", 4, 6));
        assert_eq!(metrics.reliability_score, 60);
    }

    #[test]
    fn test_short_text_penalty_alone() {
        let metrics = calculate_metrics(input("four words only here", 0, 2));
        assert_eq!(metrics.reliability_score, 75);
    }

    #[test]
    fn test_complexity_score_formula() {
        // 3*15 + 2*10 = 65
        let metrics = calculate_metrics(input("one two three four five", 2, 3));
        assert_eq!(metrics.complexity_score, 65);
    }

    #[test]
    fn test_complexity_score_is_clamped() {
        let metrics = calculate_metrics(input("one two three four five", 10, 20));
        assert_eq!(metrics.complexity_score, 100);
    }

    #[test]
    fn test_scores_stay_in_range_for_extreme_input() {
        let text = "word ".repeat(10_000);
        let metrics = calculate_metrics(input(&text, 100, 100));

        assert!(metrics.reliability_score <= 100);
        assert!(metrics.complexity_score <= 100);
    }
}
