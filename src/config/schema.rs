//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Navigation settings.
    pub navigation: NavigationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Page definitions, referenced by name from routes.
    pub pages: HashMap<String, PageConfig>,

    /// Route definitions, in registration order.
    pub routes: Vec<RouteConfig>,
}

/// Navigation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Pathname of the history entry the navigator starts from.
    pub initial_path: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
        }
    }
}

/// A page rendered from a text template.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageConfig {
    /// Markup with `{key}` placeholders filled from history state.
    pub template: String,
}

/// Route configuration mapping a pattern to a page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Pattern such as `/user/:name`.
    pub path: String,

    /// Name of the page in `[pages]`.
    pub page: String,

    /// Static state merged into the history entry.
    #[serde(default)]
    pub state: HashMap<String, String>,

    /// Load the page on first navigation instead of up front.
    #[serde(default)]
    pub lazy: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
