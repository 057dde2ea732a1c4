//! Problem service

use crate::{
    catalog::ProblemCatalog,
    error::{AppError, AppResult},
    handlers::problems::{
        request::SubmitSolutionRequest,
        response::{ProblemResponse, ProblemSummary, ProblemsListResponse, SubmissionResultResponse},
    },
    judge::Judge,
    models::{Problem, Submission},
};

/// Problem service for catalog lookups and submissions
pub struct ProblemService;

impl ProblemService {
    /// List every problem in the catalog
    pub fn list_problems(catalog: &ProblemCatalog) -> ProblemsListResponse {
        let problems: Vec<ProblemSummary> = catalog.iter().map(ProblemSummary::from).collect();
        ProblemsListResponse {
            total: problems.len(),
            problems,
        }
    }

    /// Get problem by ID
    pub fn get_problem(catalog: &ProblemCatalog, id: &str) -> AppResult<ProblemResponse> {
        Self::find(catalog, id).map(ProblemResponse::from)
    }

    /// Judge a solution against the problem's hidden test cases
    pub async fn submit(
        judge: &Judge,
        catalog: &ProblemCatalog,
        id: &str,
        payload: SubmitSolutionRequest,
    ) -> AppResult<SubmissionResultResponse> {
        let problem = Self::find(catalog, id)?;

        let submission = Submission::new(
            payload.source,
            problem.entry_point_name.clone(),
            problem.test_cases.clone(),
        );
        let report = judge.judge(submission).await?;

        tracing::info!(
            problem = %problem.id,
            passed = report.passed_count(),
            total = problem.test_cases.len(),
            "Submission judged"
        );

        Ok(SubmissionResultResponse {
            problem_id: problem.id.clone(),
            accepted: report.all_passed(),
            report: report.into(),
        })
    }

    fn find<'a>(catalog: &'a ProblemCatalog, id: &str) -> AppResult<&'a Problem> {
        catalog
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Problem `{}` not found", id)))
    }
}
