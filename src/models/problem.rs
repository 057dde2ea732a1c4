//! Problem model

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::problems;

use super::TestCase;

/// A problem with its hidden test cases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// URL-safe identifier
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Function name the submission must define
    pub entry_point_name: String,
    /// Hidden cases, never returned to clients
    pub test_cases: Vec<TestCase>,
}

impl Problem {
    /// Built-in sample problem
    pub fn two_sum() -> Self {
        Self {
            id: problems::TWO_SUM.to_string(),
            title: "Two Sum".to_string(),
            description: "Write a function `twoSum(a, b)` that returns the sum of its two arguments."
                .to_string(),
            difficulty: Some(Difficulty::Easy),
            entry_point_name: "twoSum".to_string(),
            test_cases: vec![
                TestCase::new(vec![json!(7), json!(2)], json!(9)),
                TestCase::new(vec![json!(0), json!(10)], json!(10)),
                TestCase::new(vec![json!(-4), json!(4)], json!(0)),
                TestCase::new(vec![json!(1.5), json!(2.25)], json!(3.75)),
            ],
        }
    }
}

/// Problem difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
