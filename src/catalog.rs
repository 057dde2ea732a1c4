//! In-memory problem catalog
//!
//! Holds the built-in problems plus any loaded from a JSON file at startup.
//! The catalog is read-only once the server is running.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context};

use crate::models::Problem;
use crate::utils::validation::validate_entry_point_name;

/// Read-only problem store keyed by problem id
#[derive(Debug, Clone, Default)]
pub struct ProblemCatalog {
    problems: BTreeMap<String, Problem>,
}

impl ProblemCatalog {
    /// Catalog with only the built-in problems
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.insert(Problem::two_sum());
        catalog
    }

    /// Built-in problems extended with the contents of `path`.
    ///
    /// The file holds a JSON array of problems; an id that already exists
    /// replaces the earlier entry.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading problem catalog {}", path.display()))?;
        let problems: Vec<Problem> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing problem catalog {}", path.display()))?;

        let mut catalog = Self::builtin();
        for problem in problems {
            if problem.id.is_empty() {
                bail!("problem with empty id in {}", path.display());
            }
            if let Err(reason) = validate_entry_point_name(&problem.entry_point_name) {
                bail!("problem {}: {}", problem.id, reason);
            }
            if problem.test_cases.is_empty() {
                bail!("problem {} has no test cases", problem.id);
            }
            catalog.insert(problem);
        }

        tracing::info!(problems = catalog.len(), path = %path.display(), "Problem catalog loaded");
        Ok(catalog)
    }

    fn insert(&mut self, problem: Problem) {
        self.problems.insert(problem.id.clone(), problem);
    }

    /// Look up a problem by id
    pub fn get(&self, id: &str) -> Option<&Problem> {
        self.problems.get(id)
    }

    /// All problems ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.values()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_catalog_has_two_sum() {
        let catalog = ProblemCatalog::builtin();
        let problem = catalog.get("two-sum").unwrap();
        assert_eq!(problem.entry_point_name, "twoSum");
        assert!(!problem.test_cases.is_empty());
    }

    #[test]
    fn test_load_extends_builtin_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": "echo",
                "title": "Echo",
                "entry_point_name": "echo",
                "test_cases": [{{ "input": ["hi"], "expected": "hi" }}]
            }}]"#
        )
        .unwrap();

        let catalog = ProblemCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("echo").unwrap().test_cases.len(), 1);
        assert!(catalog.get("two-sum").is_some());
    }

    #[test]
    fn test_load_rejects_invalid_entry_point() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": "bad",
                "title": "Bad",
                "entry_point_name": "not valid",
                "test_cases": [{{ "input": [], "expected": 1 }}]
            }}]"#
        )
        .unwrap();

        let err = ProblemCatalog::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(ProblemCatalog::load(&missing).is_err());
    }
}
