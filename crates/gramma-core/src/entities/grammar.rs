use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of one grammar check, as returned by the grammar backend.
///
/// Immutable once produced. History keeps these in insertion order.
///
/// Older backend builds spell `dependency_valid` as `dep_valid`; both are
/// accepted on input, only `dependency_valid` is written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GrammarResult {
    pub sentence: String,
    pub ll1_valid: bool,
    #[serde(alias = "dep_valid")]
    pub dependency_valid: bool,
    pub language_tool_issues: Vec<String>,
    pub is_grammatically_correct: bool,
}

/// Derived statistics over the grammar-check history.
///
/// Has no identity of its own; always recomputed from the full history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_checks: u32,
    /// Percentage of correct checks, 0..=100.
    pub grammar_score: u32,
    /// Last-ten minus first-ten score, in percentage points.
    pub improvement: i32,
    pub streak: u32,
}

impl Default for Stats {
    /// Zero-history snapshot. The score is optimistic (100), not undefined.
    fn default() -> Self {
        Self {
            total_checks: 0,
            grammar_score: 100,
            improvement: 0,
            streak: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_legacy_dep_valid_field() {
        let json = r#"{
            "sentence": "She go to school.",
            "ll1_valid": true,
            "dep_valid": false,
            "language_tool_issues": ["Possible agreement error"],
            "is_grammatically_correct": false
        }"#;
        let result: GrammarResult = serde_json::from_str(json).unwrap();
        assert!(!result.dependency_valid);

        let out = serde_json::to_value(&result).unwrap();
        assert!(out.get("dependency_valid").is_some());
        assert!(out.get("dep_valid").is_none());
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{
            "sentence": "I run.",
            "ll1_valid": true,
            "dependency_valid": true,
            "is_grammatically_correct": true
        }"#;
        assert!(serde_json::from_str::<GrammarResult>(json).is_err());
    }

    #[test]
    fn stats_serialize_camel_case() {
        let value = serde_json::to_value(Stats::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "totalChecks": 0,
                "grammarScore": 100,
                "improvement": 0,
                "streak": 0
            })
        );
    }
}
