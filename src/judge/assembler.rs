//! Result assembly

use crate::models::{CapturedLogs, ExecutionOutcome, Failure, PlaygroundReport, RunReport, TestResult};

/// Merge the harness outcome and the captured output into the terminal report.
///
/// A total failure yields only the error and the logs; no case is scored.
pub fn assemble(outcome: Result<Vec<TestResult>, Failure>, logs: CapturedLogs) -> RunReport {
    match outcome {
        Ok(results) => RunReport::Completed { results, logs },
        Err(error) => {
            debug_assert!(error.kind.is_total(), "local failure escaped the harness");
            RunReport::Failed { error, logs }
        }
    }
}

/// Shape a single playground call into its report
pub fn assemble_playground(
    outcome: Result<ExecutionOutcome, Failure>,
    logs: CapturedLogs,
) -> PlaygroundReport {
    match outcome {
        Ok(ExecutionOutcome::Success { returned }) => PlaygroundReport::Returned {
            result: returned.to_display_value(),
            logs,
        },
        Ok(ExecutionOutcome::Failure(error)) | Err(error) => PlaygroundReport::Failed { error, logs },
    }
}
