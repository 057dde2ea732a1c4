//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

/// Submit a solution to a catalog problem
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSolutionRequest {
    /// JavaScript source defining the problem's entry point
    #[validate(length(min = 1))]
    pub source: String,
}
