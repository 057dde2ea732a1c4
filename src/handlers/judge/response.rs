//! Judge response DTOs

use serde::Serialize;
use serde_json::Value;

use crate::models::{CapturedLogs, ErrorKind, PlaygroundReport, RunReport, TestResult};

/// Wire form of a run report
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RunReportResponse {
    Completed {
        results: Vec<TestResult>,
        passed: usize,
        total: usize,
        logs: Vec<String>,
        logs_truncated: bool,
    },
    Failed {
        error: String,
        kind: ErrorKind,
        logs: Vec<String>,
        logs_truncated: bool,
    },
}

impl From<RunReport> for RunReportResponse {
    fn from(report: RunReport) -> Self {
        let passed = report.passed_count();
        match report {
            RunReport::Completed { results, logs } => {
                let (logs, logs_truncated) = split_logs(logs);
                RunReportResponse::Completed {
                    total: results.len(),
                    passed,
                    results,
                    logs,
                    logs_truncated,
                }
            }
            RunReport::Failed { error, logs } => {
                let (logs, logs_truncated) = split_logs(logs);
                RunReportResponse::Failed {
                    error: error.message,
                    kind: error.kind,
                    logs,
                    logs_truncated,
                }
            }
        }
    }
}

/// Wire form of a playground run
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PlaygroundResponse {
    Returned {
        result: Value,
        logs: Vec<String>,
    },
    Failed {
        error: String,
        kind: ErrorKind,
        logs: Vec<String>,
    },
}

impl From<PlaygroundReport> for PlaygroundResponse {
    fn from(report: PlaygroundReport) -> Self {
        match report {
            PlaygroundReport::Returned { result, logs } => PlaygroundResponse::Returned {
                result,
                logs: split_logs(logs).0,
            },
            PlaygroundReport::Failed { error, logs } => PlaygroundResponse::Failed {
                error: error.message,
                kind: error.kind,
                logs: split_logs(logs).0,
            },
        }
    }
}

fn split_logs(logs: CapturedLogs) -> (Vec<String>, bool) {
    let lines = logs.entries.into_iter().map(|entry| entry.text).collect();
    (lines, logs.truncated)
}
