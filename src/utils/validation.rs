//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{HARNESS_GLOBAL, RESERVED_WORDS};

/// Plain ASCII JavaScript identifier
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex is valid"));

/// Validate that an entry point name can be spliced into a script as a bare
/// identifier reference
pub fn validate_entry_point_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Entry point name cannot be empty");
    }
    if name.len() > 64 {
        return Err("Entry point name must be at most 64 characters");
    }
    if !IDENTIFIER.is_match(name) {
        return Err("Entry point name must be a plain JavaScript identifier");
    }
    if RESERVED_WORDS.contains(&name) || name == HARNESS_GLOBAL {
        return Err("Entry point name is a reserved word");
    }
    Ok(())
}

/// Validate source code size
pub fn validate_source_code(code: &str, max_bytes: usize) -> Result<(), String> {
    if code.trim().is_empty() {
        return Err("Source code cannot be empty".to_string());
    }
    if code.len() > max_bytes {
        return Err(format!(
            "Source code exceeds maximum size of {} bytes",
            max_bytes
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entry_point_name() {
        assert!(validate_entry_point_name("twoSum").is_ok());
        assert!(validate_entry_point_name("_helper$2").is_ok());
        assert!(validate_entry_point_name("$").is_ok());

        assert!(validate_entry_point_name("").is_err());
        assert!(validate_entry_point_name("2sum").is_err());
        assert!(validate_entry_point_name("two-sum").is_err());
        assert!(validate_entry_point_name("a;b").is_err());
        assert!(validate_entry_point_name("class").is_err());
        assert!(validate_entry_point_name("__judge").is_err());
        assert!(validate_entry_point_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_source_code() {
        assert!(validate_source_code("function f() {}", 1024).is_ok());
        assert!(validate_source_code("   \n", 1024).is_err());
        assert!(validate_source_code(&"a".repeat(2048), 1024).is_err());
    }
}
