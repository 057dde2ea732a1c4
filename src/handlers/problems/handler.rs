//! Problem handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{error::AppResult, services::ProblemService, state::AppState};

use super::{
    request::SubmitSolutionRequest,
    response::{ProblemResponse, ProblemsListResponse, SubmissionResultResponse},
};

/// List all problems
pub async fn list_problems(State(state): State<AppState>) -> Json<ProblemsListResponse> {
    Json(ProblemService::list_problems(state.catalog()))
}

/// Get a specific problem
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::get_problem(state.catalog(), &id)?;
    Ok(Json(problem))
}

/// Judge a solution against the problem's hidden test cases
pub async fn submit_solution(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SubmitSolutionRequest>,
) -> AppResult<Json<SubmissionResultResponse>> {
    payload.validate()?;

    let result = ProblemService::submit(state.judge(), state.catalog(), &id, payload).await?;
    Ok(Json(result))
}
