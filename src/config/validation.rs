//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (routes reference existing pages)
//! - Check that patterns and the initial path are absolute
//! - Report patterns shadowed by a later registration
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Duplicate patterns are legal (last registration wins), so they are
//!   reported separately rather than rejected

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty path")]
    EmptyPath { index: usize },

    #[error("route path '{path}' must start with '/'")]
    RelativePath { path: String },

    #[error("route '{path}' references unknown page '{page}'")]
    UnknownPage { path: String, page: String },

    #[error("initial path '{0}' must start with '/'")]
    RelativeInitialPath(String),

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate `config`, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.path.is_empty() {
            errors.push(ValidationError::EmptyPath { index });
        } else if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                path: route.path.clone(),
            });
        }

        if !config.pages.contains_key(&route.page) {
            errors.push(ValidationError::UnknownPage {
                path: route.path.clone(),
                page: route.page.clone(),
            });
        }
    }

    if !config.navigation.initial_path.starts_with('/') {
        errors.push(ValidationError::RelativeInitialPath(
            config.navigation.initial_path.clone(),
        ));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Patterns registered more than once; only the last registration is reachable.
pub fn shadowed_patterns(config: &RouterConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut shadowed = Vec::new();

    for route in &config.routes {
        if !seen.insert(route.path.as_str()) && !shadowed.contains(&route.path) {
            shadowed.push(route.path.clone());
        }
    }

    shadowed
}
