//! Execution outcomes, per-case results and the terminal run report

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::error_kinds;

/// Failure taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Source failed to parse or threw while initializing
    LoadError,
    /// The agreed binding does not exist
    EntryPointMissing,
    /// The agreed binding exists but cannot be called
    EntryPointNotCallable,
    /// Shared time budget exhausted during load or harness
    Timeout,
    /// Isolate approached its heap limit
    MemoryLimitExceeded,
    /// A single test-case call threw
    RuntimeError,
}

impl ErrorKind {
    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::LoadError => error_kinds::LOAD_ERROR,
            ErrorKind::EntryPointMissing => error_kinds::ENTRY_POINT_MISSING,
            ErrorKind::EntryPointNotCallable => error_kinds::ENTRY_POINT_NOT_CALLABLE,
            ErrorKind::Timeout => error_kinds::TIMEOUT,
            ErrorKind::MemoryLimitExceeded => error_kinds::MEMORY_LIMIT_EXCEEDED,
            ErrorKind::RuntimeError => error_kinds::RUNTIME_ERROR,
        }
    }

    /// Whether this kind prevents any test case from being scored
    pub fn is_total(&self) -> bool {
        !matches!(self, ErrorKind::RuntimeError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A classified failure with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn load_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LoadError, message)
    }

    pub fn entry_point_missing(name: &str) -> Self {
        Self::new(
            ErrorKind::EntryPointMissing,
            format!("Entry point `{}` is not defined", name),
        )
    }

    pub fn entry_point_not_callable(name: &str, type_of: &str) -> Self {
        Self::new(
            ErrorKind::EntryPointNotCallable,
            format!("Entry point `{}` is not a function (found {})", name, type_of),
        )
    }

    pub fn timeout(budget: Duration) -> Self {
        Self::new(
            ErrorKind::Timeout,
            format!("Execution exceeded the time budget of {} ms", budget.as_millis()),
        )
    }

    pub fn memory_limit_exceeded(limit_bytes: usize) -> Self {
        Self::new(
            ErrorKind::MemoryLimitExceeded,
            format!("Execution exceeded the heap limit of {} MB", limit_bytes / (1024 * 1024)),
        )
    }

    pub fn runtime_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RuntimeError, message)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// A value handed back by the entry point
#[derive(Debug, Clone, PartialEq)]
pub enum Returned {
    /// JSON-representable value
    Json(Value),
    /// `undefined`, non-finite numbers, BigInt, functions, symbols and
    /// anything that failed to serialize; carries a printable rendering
    Opaque(String),
}

impl Returned {
    /// Value shown to the user as the actual output
    pub fn to_display_value(&self) -> Value {
        match self {
            Returned::Json(value) => value.clone(),
            Returned::Opaque(repr) => Value::String(repr.clone()),
        }
    }
}

/// Result of one invocation of the entry point
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    Success { returned: Returned },
    Failure(Failure),
}

/// Graded result of one test case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub input: Vec<Value>,
    pub expected: Value,
    /// Absent when the call threw
    #[serde(rename = "output")]
    pub actual: Option<Value>,
    pub passed: bool,
    /// Message of the error thrown by this call, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Console method that produced a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Log,
    Info,
    Debug,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse the level name sent by the prelude
    pub fn from_method(method: &str) -> Self {
        match method {
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Log,
        }
    }
}

/// One captured console line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// 0-based emission order
    pub sequence: u64,
    pub level: LogLevel,
    pub text: String,
}

/// Everything a run printed, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedLogs {
    pub entries: Vec<LogEntry>,
    /// Output beyond the byte cap was dropped
    pub truncated: bool,
}

impl CapturedLogs {
    /// Text of every entry, in emission order
    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }
}

/// Terminal aggregate of one submission.
///
/// A report is either fully graded or a single total failure, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum RunReport {
    Completed {
        results: Vec<TestResult>,
        logs: CapturedLogs,
    },
    Failed {
        error: Failure,
        logs: CapturedLogs,
    },
}

impl RunReport {
    /// Per-case results, empty after a total failure
    pub fn results(&self) -> &[TestResult] {
        match self {
            RunReport::Completed { results, .. } => results,
            RunReport::Failed { .. } => &[],
        }
    }

    /// Top-level error, if the run failed as a whole
    pub fn error(&self) -> Option<&Failure> {
        match self {
            RunReport::Completed { .. } => None,
            RunReport::Failed { error, .. } => Some(error),
        }
    }

    pub fn logs(&self) -> &CapturedLogs {
        match self {
            RunReport::Completed { logs, .. } | RunReport::Failed { logs, .. } => logs,
        }
    }

    /// Number of passed cases
    pub fn passed_count(&self) -> usize {
        self.results().iter().filter(|r| r.passed).count()
    }

    /// True when the run completed and every case passed
    pub fn all_passed(&self) -> bool {
        matches!(self, RunReport::Completed { results, .. } if results.iter().all(|r| r.passed))
    }
}

/// Result of a playground run: the snippet's return value or its error
#[derive(Debug, Clone, PartialEq)]
pub enum PlaygroundReport {
    Returned { result: Value, logs: CapturedLogs },
    Failed { error: Failure, logs: CapturedLogs },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_runtime_error_is_local() {
        assert!(ErrorKind::LoadError.is_total());
        assert!(ErrorKind::EntryPointMissing.is_total());
        assert!(ErrorKind::EntryPointNotCallable.is_total());
        assert!(ErrorKind::Timeout.is_total());
        assert!(ErrorKind::MemoryLimitExceeded.is_total());
        assert!(!ErrorKind::RuntimeError.is_total());
    }

    #[test]
    fn test_error_kind_serializes_as_code() {
        let encoded = serde_json::to_value(ErrorKind::EntryPointNotCallable).unwrap();
        assert_eq!(encoded, json!("ENTRY_POINT_NOT_CALLABLE"));
        assert_eq!(ErrorKind::Timeout.to_string(), "TIMEOUT");
    }

    #[test]
    fn test_failed_report_has_no_results() {
        let report = RunReport::Failed {
            error: Failure::entry_point_missing("twoSum"),
            logs: CapturedLogs::default(),
        };

        assert!(report.results().is_empty());
        assert_eq!(report.error().map(|e| e.kind), Some(ErrorKind::EntryPointMissing));
        assert!(!report.all_passed());
    }

    #[test]
    fn test_test_result_serializes_actual_as_output() {
        let result = TestResult {
            input: vec![json!(7), json!(2)],
            expected: json!(9),
            actual: Some(json!(5)),
            passed: false,
            error: None,
        };

        let encoded = serde_json::to_value(&result).unwrap();
        assert_eq!(encoded["output"], json!(5));
        assert!(encoded.get("error").is_none());
    }

    #[test]
    fn test_opaque_values_display_as_text() {
        assert_eq!(Returned::Opaque("undefined".into()).to_display_value(), json!("undefined"));
        assert_eq!(Returned::Json(json!([1, 2])).to_display_value(), json!([1, 2]));
    }
}
