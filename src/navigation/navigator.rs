//! Navigation driver: resolves a path and runs the page lifecycle.
//!
//! # Responsibilities
//! - Resolve requested paths against the current route table
//! - Replace the mounted page: destroy, push history, build, render, mount
//! - Keep link activation in sync with the current pathname
//! - Serve queued requests from `RouterHandle`s and route table reloads
//!
//! # Design Decisions
//! - No match is a no-op: history and document stay untouched
//! - The route table is swapped whole; an in-flight navigation keeps the
//!   snapshot it resolved against
//! - Errors from page hooks abort the navigation and are returned to the caller
//! - Shutdown drains the request queue, so a push queued before the signal
//!   is never dropped

use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwap;
use tokio::sync::{broadcast, mpsc};
use tracing::Instrument;

use crate::navigation::document::Document;
use crate::navigation::handle::RouterHandle;
use crate::navigation::history::History;
use crate::navigation::page::{Page, PageParams};
use crate::navigation::types::{ElementId, Navigation, NavigationResult};
use crate::observability::{metrics, tracing::navigation_span};
use crate::routing::router::{ResolvedRoute, RouteTable};
use crate::routing::types::StateMap;

/// Drives navigation between pages for one document.
pub struct Navigator<H, D> {
    routes: Arc<ArcSwap<RouteTable>>,
    history: H,
    document: D,
    page: Option<Box<dyn Page>>,
    element: Option<ElementId>,
    handle: RouterHandle,
    requests: mpsc::UnboundedReceiver<String>,
}

impl<H: History, D: Document> Navigator<H, D> {
    /// Create a navigator over `routes`. Nothing is rendered until
    /// [`start`](Self::start) or [`push`](Self::push) is called.
    pub fn new(routes: RouteTable, history: H, document: D) -> Self {
        metrics::record_route_table_size(routes.len());

        let routes = Arc::new(ArcSwap::from_pointee(routes));
        let (tx, requests) = mpsc::unbounded_channel();
        let handle = RouterHandle::new(tx, routes.clone());

        Self {
            routes,
            history,
            document,
            page: None,
            element: None,
            handle,
            requests,
        }
    }

    /// Handle for queuing navigations and reading the route table.
    pub fn handle(&self) -> RouterHandle {
        self.handle.clone()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// State of the current history entry.
    pub fn state_history(&self) -> StateMap {
        self.history.state()
    }

    /// Replace the route table. Navigations started afterwards use `routes`.
    pub fn replace_routes(&self, routes: RouteTable) {
        tracing::info!(routes = routes.len(), "Route table replaced");
        metrics::record_route_table_size(routes.len());
        self.routes.store(Arc::new(routes));
    }

    /// Navigate to the history's current pathname.
    pub async fn start(&mut self) -> NavigationResult<Navigation> {
        let path = self.history.pathname();
        self.push(&path).await
    }

    /// Follow a clicked link. `None` (no link attribute) is ignored.
    pub async fn click(&mut self, link: Option<&str>) -> NavigationResult<Option<Navigation>> {
        match link {
            Some(path) => self.push(path).await.map(Some),
            None => Ok(None),
        }
    }

    /// Navigate to `path`.
    pub async fn push(&mut self, path: &str) -> NavigationResult<Navigation> {
        let span = navigation_span(path);
        self.navigate(path).instrument(span).await
    }

    /// Serve queued pushes and route table updates until shutdown.
    ///
    /// Route updates are applied before queued pushes. On shutdown, everything
    /// already queued is still served before the loop returns.
    pub async fn run(
        &mut self,
        mut route_updates: mpsc::UnboundedReceiver<RouteTable>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        tracing::info!("Navigator loop starting");

        loop {
            tokio::select! {
                biased;

                Some(routes) = route_updates.recv() => {
                    self.replace_routes(routes);
                }
                Some(path) = self.requests.recv() => {
                    self.serve(&path).await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Navigator received shutdown signal, draining queue");
                    self.drain(&mut route_updates).await;
                    break;
                }
            }
        }
    }

    async fn drain(&mut self, route_updates: &mut mpsc::UnboundedReceiver<RouteTable>) {
        while let Ok(routes) = route_updates.try_recv() {
            self.replace_routes(routes);
        }
        while let Ok(path) = self.requests.try_recv() {
            self.serve(&path).await;
        }
    }

    async fn serve(&mut self, path: &str) {
        if let Err(e) = self.push(path).await {
            tracing::error!(path = %path, error = %e, "Navigation failed");
        }
    }

    async fn navigate(&mut self, path: &str) -> NavigationResult<Navigation> {
        let start_time = Instant::now();

        let Some(route) = self.routes.load().resolve(path) else {
            tracing::debug!(path = %path, "No route matched");
            metrics::record_navigation("no_match", start_time);
            return Ok(Navigation::NoMatch {
                path: path.to_string(),
            });
        };

        tracing::debug!(
            path = %path,
            pattern = %route.pattern,
            lazy = route.page.is_lazy(),
            "Route resolved"
        );

        match self.render(route).await {
            Ok(element) => {
                metrics::record_navigation("rendered", start_time);
                tracing::info!(path = %path, "Page rendered");
                Ok(Navigation::Rendered {
                    path: path.to_string(),
                    element,
                })
            }
            Err(e) => {
                metrics::record_navigation("failed", start_time);
                Err(e)
            }
        }
    }

    async fn render(&mut self, route: ResolvedRoute) -> NavigationResult<ElementId> {
        self.destroy().await?;

        self.set_links_active(false);
        self.history.push_state(route.state, &route.path);
        self.set_links_active(true);

        let params = PageParams {
            state_history: self.history.state(),
            router: self.handle.clone(),
        };
        let mut page = route.page.instantiate(params).await?;

        page.before_render_element().await?;
        let element = page.to_html().await?;
        let id = self.document.append(element);
        self.element = Some(id);

        let page = self.page.insert(page);
        page.after_render_element().await?;

        Ok(id)
    }

    /// Destroy the current page, then unmount its element.
    async fn destroy(&mut self) -> NavigationResult<()> {
        if let Some(mut page) = self.page.take() {
            page.destroy().await?;
        }
        if let Some(id) = self.element.take() {
            self.document.remove(id);
        }
        Ok(())
    }

    fn set_links_active(&mut self, active: bool) {
        let path = self.history.pathname();
        self.document.set_link_active(&path, active);
    }
}
