//! Submission model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One user-provided snippet under evaluation, owned by a single request
#[derive(Debug, Clone)]
pub struct Submission {
    /// JavaScript source text
    pub source: String,
    /// Binding the harness invokes
    pub entry_point_name: String,
    /// Cases in the order they must be called
    pub test_cases: Vec<TestCase>,
}

impl Submission {
    /// Create a new submission
    pub fn new(source: impl Into<String>, entry_point_name: impl Into<String>, test_cases: Vec<TestCase>) -> Self {
        Self {
            source: source.into(),
            entry_point_name: entry_point_name.into(),
            test_cases,
        }
    }
}

/// One (input, expected-output) pair used to grade a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Positional arguments, spread into the call in order
    #[serde(default)]
    pub input: Vec<Value>,

    /// Value the entry point must return
    pub expected: Value,

    /// Equality policy for this case
    #[serde(default, skip_serializing_if = "Comparison::is_strict")]
    pub comparison: Comparison,
}

impl TestCase {
    /// Create a strictly compared test case
    pub fn new(input: Vec<Value>, expected: Value) -> Self {
        Self {
            input,
            expected,
            comparison: Comparison::Strict,
        }
    }

    /// Opt this case into recursive equality for arrays and objects
    pub fn structural(mut self) -> Self {
        self.comparison = Comparison::Structural;
        self
    }
}

/// How a returned value is matched against the expected one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Scalars by value, compound values never equal
    #[default]
    Strict,
    /// Arrays and objects compared element by element
    Structural,
}

impl Comparison {
    fn is_strict(&self) -> bool {
        matches!(self, Comparison::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_case_deserializes_with_default_comparison() {
        let case: TestCase = serde_json::from_value(json!({
            "input": [7, 2],
            "expected": 9
        }))
        .unwrap();

        assert_eq!(case.input, vec![json!(7), json!(2)]);
        assert_eq!(case.expected, json!(9));
        assert_eq!(case.comparison, Comparison::Strict);
    }

    #[test]
    fn test_case_accepts_structural_comparison() {
        let case: TestCase = serde_json::from_value(json!({
            "input": [[2, 7, 11, 15], 9],
            "expected": [0, 1],
            "comparison": "structural"
        }))
        .unwrap();

        assert_eq!(case.comparison, Comparison::Structural);
    }

    #[test]
    fn test_case_without_input_means_no_arguments() {
        let case: TestCase = serde_json::from_value(json!({ "expected": "ok" })).unwrap();
        assert!(case.input.is_empty());
    }
}
