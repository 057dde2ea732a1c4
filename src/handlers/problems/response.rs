//! Problem response DTOs

use serde::Serialize;

use crate::handlers::judge::RunReportResponse;
use crate::models::{Difficulty, Problem};

/// Problem detail. Test cases are hidden; only their number is shown.
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Option<Difficulty>,
    pub entry_point_name: String,
    pub test_case_count: usize,
}

impl From<&Problem> for ProblemResponse {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id.clone(),
            title: problem.title.clone(),
            description: problem.description.clone(),
            difficulty: problem.difficulty,
            entry_point_name: problem.entry_point_name.clone(),
            test_case_count: problem.test_cases.len(),
        }
    }
}

/// Problem summary for lists
#[derive(Debug, Serialize)]
pub struct ProblemSummary {
    pub id: String,
    pub title: String,
    pub difficulty: Option<Difficulty>,
}

impl From<&Problem> for ProblemSummary {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id.clone(),
            title: problem.title.clone(),
            difficulty: problem.difficulty,
        }
    }
}

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemSummary>,
    pub total: usize,
}

/// Outcome of a submission to a catalog problem
#[derive(Debug, Serialize)]
pub struct SubmissionResultResponse {
    pub problem_id: String,
    /// Every hidden case passed
    pub accepted: bool,
    pub report: RunReportResponse,
}
