//! Judge service

use crate::{
    error::AppResult,
    handlers::judge::{
        request::{JudgeRequest, RunRequest},
        response::{PlaygroundResponse, RunReportResponse},
    },
    judge::Judge,
    models::Submission,
};

/// Judge service for ad-hoc runs
pub struct JudgeService;

impl JudgeService {
    /// Judge a snippet against the test cases it came with
    pub async fn judge(judge: &Judge, payload: JudgeRequest) -> AppResult<RunReportResponse> {
        let entry_point_name = payload
            .entry_point_name
            .unwrap_or_else(|| judge.config().entry_point_name.clone());

        let submission = Submission::new(payload.source, entry_point_name, payload.test_cases);
        let report = judge.judge(submission).await?;

        Ok(report.into())
    }

    /// Run a playground snippet
    pub async fn run(judge: &Judge, payload: RunRequest) -> AppResult<PlaygroundResponse> {
        let report = judge.run_playground(payload.code).await?;
        Ok(report.into())
    }
}
