//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_ENTRY_POINT_NAME, DEFAULT_MAX_CONCURRENT, DEFAULT_MAX_HEAP_MB, DEFAULT_MAX_LOG_BYTES,
    DEFAULT_MAX_SOURCE_BYTES, DEFAULT_MAX_TEST_CASES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_TIME_BUDGET_MS, MAX_TIME_BUDGET_MS,
};
use crate::utils::validation::validate_entry_point_name;

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub judge: JudgeConfig,
    pub catalog: CatalogConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Sandbox and grading limits
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Binding looked up when a request does not name one
    pub entry_point_name: String,
    /// Wall-clock budget shared by the load phase and all test-case calls
    pub time_budget: Duration,
    /// V8 heap limit in bytes
    pub max_heap_bytes: usize,
    /// Cap on captured console output
    pub max_log_bytes: usize,
    /// Largest accepted submission
    pub max_source_bytes: usize,
    /// Most test cases per submission
    pub max_test_cases: usize,
    /// Isolates allowed to run at once
    pub max_concurrent: usize,
}

/// Problem catalog configuration
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Optional JSON file with extra problems
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
            catalog: CatalogConfig::from_env(),
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "jsjudge=info,tower_http=info".to_string()),
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let entry_point_name = env::var("JUDGE_ENTRY_POINT_NAME")
            .unwrap_or_else(|_| DEFAULT_ENTRY_POINT_NAME.to_string());
        validate_entry_point_name(&entry_point_name)
            .map_err(|_| ConfigError::InvalidValue("JUDGE_ENTRY_POINT_NAME".to_string()))?;

        let time_budget_ms: u64 = parse_var("JUDGE_TIME_BUDGET_MS", DEFAULT_TIME_BUDGET_MS)?;
        if time_budget_ms == 0 || time_budget_ms > MAX_TIME_BUDGET_MS {
            return Err(ConfigError::InvalidValue("JUDGE_TIME_BUDGET_MS".to_string()));
        }

        let max_heap_mb: usize = parse_var("JUDGE_MAX_HEAP_MB", DEFAULT_MAX_HEAP_MB)?;

        Ok(Self {
            entry_point_name,
            time_budget: Duration::from_millis(time_budget_ms),
            max_heap_bytes: max_heap_mb * 1024 * 1024,
            max_log_bytes: parse_var("JUDGE_MAX_LOG_BYTES", DEFAULT_MAX_LOG_BYTES)?,
            max_source_bytes: parse_var("JUDGE_MAX_SOURCE_BYTES", DEFAULT_MAX_SOURCE_BYTES)?,
            max_test_cases: parse_var("JUDGE_MAX_TEST_CASES", DEFAULT_MAX_TEST_CASES)?,
            max_concurrent: parse_var("JUDGE_MAX_CONCURRENT", DEFAULT_MAX_CONCURRENT)?,
        })
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            entry_point_name: DEFAULT_ENTRY_POINT_NAME.to_string(),
            time_budget: Duration::from_millis(DEFAULT_TIME_BUDGET_MS),
            max_heap_bytes: DEFAULT_MAX_HEAP_MB * 1024 * 1024,
            max_log_bytes: DEFAULT_MAX_LOG_BYTES,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
            max_test_cases: DEFAULT_MAX_TEST_CASES,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

impl CatalogConfig {
    fn from_env() -> Self {
        Self {
            path: env::var("PROBLEM_CATALOG_PATH").ok().map(PathBuf::from),
        }
    }
}

/// Read an environment variable, falling back to `default` when unset
fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
