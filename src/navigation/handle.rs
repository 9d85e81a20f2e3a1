//! Cloneable handle to a running navigator.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::mpsc;

use crate::navigation::types::{NavigationError, NavigationResult};
use crate::routing::router::{ResolvedRoute, RouteTable};

/// Queues navigation requests and reads the current route table.
///
/// Handed to pages through `PageParams`, so a page can navigate without
/// holding the navigator itself.
#[derive(Debug, Clone)]
pub struct RouterHandle {
    requests: mpsc::UnboundedSender<String>,
    routes: Arc<ArcSwap<RouteTable>>,
}

impl RouterHandle {
    pub(crate) fn new(
        requests: mpsc::UnboundedSender<String>,
        routes: Arc<ArcSwap<RouteTable>>,
    ) -> Self {
        Self { requests, routes }
    }

    /// Queue a navigation to `path`; served by `Navigator::run`.
    pub fn push(&self, path: impl Into<String>) -> NavigationResult<()> {
        self.requests
            .send(path.into())
            .map_err(|_| NavigationError::Closed)
    }

    /// Resolve `path` against the current table without navigating.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        self.routes.load().resolve(path)
    }

    /// Snapshot of the current route table.
    pub fn routes(&self) -> Arc<RouteTable> {
        self.routes.load_full()
    }
}
