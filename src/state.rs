//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::catalog::ProblemCatalog;
use crate::config::Config;
use crate::judge::Judge;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Sandbox engine and its admission permits
    judge: Judge,

    /// Problems with hidden test cases
    catalog: ProblemCatalog,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(catalog: ProblemCatalog, config: Config) -> Self {
        let judge = Judge::new(config.judge.clone());
        Self {
            inner: Arc::new(AppStateInner {
                judge,
                catalog,
                config,
            }),
        }
    }

    /// Get a reference to the judge
    pub fn judge(&self) -> &Judge {
        &self.inner.judge
    }

    /// Get a reference to the problem catalog
    pub fn catalog(&self) -> &ProblemCatalog {
        &self.inner.catalog
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
