//! Judge request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::TestCase;

/// Judge a snippet against caller-supplied test cases
#[derive(Debug, Deserialize, Validate)]
pub struct JudgeRequest {
    /// JavaScript source
    #[validate(length(min = 1))]
    pub source: String,

    /// Binding to call; the configured default when absent
    #[validate(length(min = 1, max = 64))]
    pub entry_point_name: Option<String>,

    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

/// Run a snippet as a function body
#[derive(Debug, Deserialize, Validate)]
pub struct RunRequest {
    #[validate(length(min = 1))]
    pub code: String,
}
