//! Page lifecycle contract and page factories.
//!
//! A page is built from [`PageParams`] once its route resolves, rendered into
//! an [`Element`], and destroyed before the next page replaces it. Hooks are
//! async and default to no-ops.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;

use crate::navigation::handle::RouterHandle;
use crate::navigation::types::{Element, NavigationError, NavigationResult};
use crate::routing::types::StateMap;

/// A page rendered by the navigator.
pub trait Page: Send {
    /// Produce the element mounted into the document.
    fn to_html(&mut self) -> BoxFuture<'_, NavigationResult<Element>>;

    /// Called before the page's element is removed.
    fn destroy(&mut self) -> BoxFuture<'_, NavigationResult<()>> {
        future::ready(Ok(())).boxed()
    }

    /// Called after construction, before `to_html`.
    fn before_render_element(&mut self) -> BoxFuture<'_, NavigationResult<()>> {
        future::ready(Ok(())).boxed()
    }

    /// Called once the element is mounted.
    fn after_render_element(&mut self) -> BoxFuture<'_, NavigationResult<()>> {
        future::ready(Ok(())).boxed()
    }
}

/// Arguments handed to every page constructor.
#[derive(Debug, Clone)]
pub struct PageParams {
    /// History state of the entry being rendered.
    pub state_history: StateMap,

    /// Handle for navigating from inside a page.
    pub router: RouterHandle,
}

/// Builds a page immediately.
pub type PageConstructor = Arc<dyn Fn(PageParams) -> Box<dyn Page> + Send + Sync>;

/// Loads a page constructor on first use.
pub type PageLoader = Arc<dyn Fn() -> BoxFuture<'static, NavigationResult<PageConstructor>> + Send + Sync>;

/// How a route obtains its page.
#[derive(Clone)]
pub enum PageFactory {
    /// Constructor available up front.
    Simple(PageConstructor),

    /// Constructor obtained by awaiting a loader.
    Lazy(PageLoader),
}

impl PageFactory {
    /// Wrap a constructor function.
    pub fn simple<F, P>(constructor: F) -> Self
    where
        F: Fn(PageParams) -> P + Send + Sync + 'static,
        P: Page + 'static,
    {
        Self::Simple(Self::constructor(constructor))
    }

    /// Wrap an async loader that yields a constructor.
    pub fn lazy<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = NavigationResult<PageConstructor>> + Send + 'static,
    {
        Self::Lazy(Arc::new(move || loader().boxed()))
    }

    /// Box a constructor function into a [`PageConstructor`].
    pub fn constructor<F, P>(constructor: F) -> PageConstructor
    where
        F: Fn(PageParams) -> P + Send + Sync + 'static,
        P: Page + 'static,
    {
        Arc::new(move |params: PageParams| -> Box<dyn Page> { Box::new(constructor(params)) })
    }

    /// Turn this factory into a deferred one; lazy factories are returned as is.
    pub fn deferred(self) -> Self {
        match self {
            Self::Simple(constructor) => Self::lazy(move || {
                let constructor = constructor.clone();
                async move {
                    tokio::task::yield_now().await;
                    Ok::<_, NavigationError>(constructor)
                }
            }),
            lazy @ Self::Lazy(_) => lazy,
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Build the page, awaiting the loader first for lazy factories.
    pub async fn instantiate(&self, params: PageParams) -> NavigationResult<Box<dyn Page>> {
        match self {
            Self::Simple(constructor) => Ok(constructor(params)),
            Self::Lazy(loader) => {
                let constructor = loader().await?;
                Ok(constructor(params))
            }
        }
    }
}

impl fmt::Debug for PageFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(_) => f.write_str("PageFactory::Simple"),
            Self::Lazy(_) => f.write_str("PageFactory::Lazy"),
        }
    }
}
