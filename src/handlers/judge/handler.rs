//! Judge handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{error::AppResult, services::JudgeService, state::AppState};

use super::{
    request::{JudgeRequest, RunRequest},
    response::{PlaygroundResponse, RunReportResponse},
};

/// Judge a snippet against the test cases in the request.
///
/// Load failures and timeouts are reported in the body with 200; only
/// rejected requests produce an error status.
pub async fn judge_submission(
    State(state): State<AppState>,
    Json(payload): Json<JudgeRequest>,
) -> AppResult<Json<RunReportResponse>> {
    payload.validate()?;

    let report = JudgeService::judge(state.judge(), payload).await?;
    Ok(Json(report))
}

/// Run a snippet once and return its value
pub async fn run_snippet(
    State(state): State<AppState>,
    Json(payload): Json<RunRequest>,
) -> AppResult<Json<PlaygroundResponse>> {
    payload.validate()?;

    let report = JudgeService::run(state.judge(), payload).await?;
    Ok(Json(report))
}
