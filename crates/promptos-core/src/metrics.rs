//! Compilation quality metrics

use serde::{Deserialize, Serialize};

/// Heuristic quality metrics derived from a compiled intent
///
/// All scores are clamped into [0, 100]; the cost estimate carries 8-decimal
/// precision. Metrics are derived values and never independently mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub estimated_tokens: u64,
    pub estimated_cost: f64,
    pub reliability_score: u8,
    pub complexity_score: u8,
}

/// Clamp an arbitrary score into the 0-100 range
pub fn clamp_score(score: i64) -> u8 {
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_score(-40), 0);
        assert_eq!(clamp_score(0), 0);
        assert_eq!(clamp_score(64), 64);
        assert_eq!(clamp_score(100), 100);
        assert_eq!(clamp_score(1_000), 100);
    }

    #[test]
    fn test_metrics_serialize_camel_case() {
        let metrics = Metrics {
            estimated_tokens: 13,
            estimated_cost: 0.0000013,
            reliability_score: 85,
            complexity_score: 40,
        };

        let value = serde_json::to_value(&metrics).unwrap();
        assert_eq!(value["estimatedTokens"], 13);
        assert_eq!(value["reliabilityScore"], 85);
        assert_eq!(value["complexityScore"], 40);
    }
}
