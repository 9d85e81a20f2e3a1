//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the page registry and the initial route table
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shadowed patterns are logged, not rejected

use std::path::Path;

use thiserror::Error;

use crate::config::validation::shadowed_patterns;
use crate::config::{load_config, ConfigError, RouterConfig};
use crate::navigation::registry::PageRegistry;
use crate::navigation::types::NavigationError;
use crate::routing::router::RouteTable;

/// Error raised while bringing the router up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Everything needed to start navigating.
#[derive(Debug)]
pub struct Bootstrap {
    pub config: RouterConfig,
    pub registry: PageRegistry,
    pub routes: RouteTable,
}

/// Build the registry and route table for an already loaded config.
pub fn prepare(config: RouterConfig) -> Result<Bootstrap, StartupError> {
    for pattern in shadowed_patterns(&config) {
        tracing::warn!(pattern = %pattern, "Pattern registered more than once; last registration wins");
    }

    let registry = PageRegistry::from_config(&config);
    let routes = registry.build_table(&config.routes)?;

    tracing::info!(
        routes = routes.len(),
        pages = registry.len(),
        initial_path = %config.navigation.initial_path,
        "Route table built"
    );

    Ok(Bootstrap {
        config,
        registry,
        routes,
    })
}

/// Load the config at `path` and prepare it.
pub fn bootstrap(path: &Path) -> Result<Bootstrap, StartupError> {
    let config = load_config(path)?;
    prepare(config)
}
