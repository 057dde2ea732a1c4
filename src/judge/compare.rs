//! Comparison policy and per-case grading

use serde_json::Value;

use crate::models::{Comparison, ExecutionOutcome, Returned, TestCase, TestResult};

/// Whether `actual` matches `expected` under `comparison`.
///
/// Numbers compare as IEEE doubles, the way the submission's runtime sees
/// them, so `9` and `9.0` are equal. No value is ever coerced across types.
/// Under [`Comparison::Strict`] arrays and objects are never equal.
pub fn values_equal(expected: &Value, actual: &Value, comparison: Comparison) -> bool {
    match (expected, actual) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            comparison == Comparison::Structural
                && a.len() == b.len()
                && a.iter().zip(b).all(|(x, y)| values_equal(x, y, comparison))
        }
        (Value::Object(a), Value::Object(b)) => {
            comparison == Comparison::Structural
                && a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| values_equal(x, y, comparison)))
        }
        _ => false,
    }
}

/// Derive the result of one test case from its call outcome
pub fn grade(case: &TestCase, outcome: ExecutionOutcome) -> TestResult {
    match outcome {
        ExecutionOutcome::Success { returned } => {
            let passed = match &returned {
                Returned::Json(actual) => values_equal(&case.expected, actual, case.comparison),
                Returned::Opaque(_) => false,
            };
            TestResult {
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual: Some(returned.to_display_value()),
                passed,
                error: None,
            }
        }
        ExecutionOutcome::Failure(failure) => TestResult {
            input: case.input.clone(),
            expected: case.expected.clone(),
            actual: None,
            passed: false,
            error: Some(failure.message),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Failure;
    use serde_json::json;

    #[test]
    fn test_scalars_compare_by_value() {
        assert!(values_equal(&json!(9), &json!(9), Comparison::Strict));
        assert!(values_equal(&json!(9), &json!(9.0), Comparison::Strict));
        assert!(values_equal(&json!("hi"), &json!("hi"), Comparison::Strict));
        assert!(values_equal(&json!(true), &json!(true), Comparison::Strict));
        assert!(values_equal(&json!(null), &json!(null), Comparison::Strict));

        assert!(!values_equal(&json!(9), &json!(10), Comparison::Strict));
        assert!(!values_equal(&json!(0.1), &json!(0.30000000000000004), Comparison::Strict));
    }

    #[test]
    fn test_types_are_never_coerced() {
        assert!(!values_equal(&json!(9), &json!("9"), Comparison::Strict));
        assert!(!values_equal(&json!(1), &json!(true), Comparison::Strict));
        assert!(!values_equal(&json!(0), &json!(null), Comparison::Strict));
        assert!(!values_equal(&json!(""), &json!(false), Comparison::Structural));
    }

    #[test]
    fn test_compound_values_need_structural_comparison() {
        assert!(!values_equal(&json!([0, 1]), &json!([0, 1]), Comparison::Strict));
        assert!(!values_equal(&json!({"a": 1}), &json!({"a": 1}), Comparison::Strict));

        assert!(values_equal(&json!([0, 1]), &json!([0, 1.0]), Comparison::Structural));
        assert!(values_equal(
            &json!({"a": [1, {"b": "c"}]}),
            &json!({"a": [1, {"b": "c"}]}),
            Comparison::Structural
        ));
        assert!(!values_equal(&json!([0, 1]), &json!([1, 0]), Comparison::Structural));
        assert!(!values_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2}), Comparison::Structural));
        assert!(!values_equal(&json!([1]), &json!(["1"]), Comparison::Structural));
    }

    #[test]
    fn test_grade_success() {
        let case = TestCase::new(vec![json!(7), json!(2)], json!(9));
        let result = grade(
            &case,
            ExecutionOutcome::Success {
                returned: Returned::Json(json!(9)),
            },
        );

        assert!(result.passed);
        assert_eq!(result.actual, Some(json!(9)));
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_grade_wrong_answer_keeps_actual() {
        let case = TestCase::new(vec![json!(7), json!(2)], json!(9));
        let result = grade(
            &case,
            ExecutionOutcome::Success {
                returned: Returned::Json(json!(5)),
            },
        );

        assert!(!result.passed);
        assert_eq!(result.actual, Some(json!(5)));
    }

    #[test]
    fn test_grade_opaque_never_passes() {
        let case = TestCase::new(vec![], json!("undefined"));
        let result = grade(
            &case,
            ExecutionOutcome::Success {
                returned: Returned::Opaque("undefined".to_string()),
            },
        );

        assert!(!result.passed);
    }

    #[test]
    fn test_grade_runtime_error() {
        let case = TestCase::new(vec![json!(1)], json!(1));
        let result = grade(
            &case,
            ExecutionOutcome::Failure(Failure::runtime_error("TypeError: boom")),
        );

        assert!(!result.passed);
        assert_eq!(result.actual, None);
        assert_eq!(result.error.as_deref(), Some("TypeError: boom"));
    }
}
