//! Page registry: named page factories and route table construction.
//!
//! # Responsibilities
//! - Map page names from configuration to page factories
//! - Build an immutable `RouteTable` from route configuration
//!
//! # Design Decisions
//! - Route order from configuration is preserved (last match wins)
//! - A route marked `lazy` gets a deferred factory
//! - An unknown page name fails the whole build

use std::collections::HashMap;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::navigation::page::PageFactory;
use crate::navigation::template::TemplatePage;
use crate::navigation::types::{NavigationError, NavigationResult};
use crate::routing::router::{Route, RouteTable};

/// Named page factories.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pages: HashMap<String, PageFactory>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with one `TemplatePage` per `[pages.<name>]` entry.
    pub fn from_config(config: &RouterConfig) -> Self {
        let mut registry = Self::new();
        for (name, page) in &config.pages {
            registry.register(name.clone(), TemplatePage::factory(page.template.clone()));
        }
        registry
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, factory: PageFactory) -> &mut Self {
        self.pages.insert(name.into(), factory);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PageFactory> {
        self.pages.get(name)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Build a route table from `routes`, in order.
    pub fn build_table(&self, routes: &[RouteConfig]) -> NavigationResult<RouteTable> {
        routes.iter().map(|route| self.build_route(route)).collect()
    }

    fn build_route(&self, route: &RouteConfig) -> NavigationResult<Route> {
        let factory = self
            .get(&route.page)
            .cloned()
            .ok_or_else(|| NavigationError::UnknownPage {
                pattern: route.path.clone(),
                page: route.page.clone(),
            })?;

        let factory = if route.lazy { factory.deferred() } else { factory };

        Ok(Route::new(route.path.clone(), factory).with_state(route.state.clone()))
    }
}
