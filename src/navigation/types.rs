//! Navigation types and error definitions.

use thiserror::Error;

/// Errors that can occur while navigating to a page.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// A deferred page loader failed.
    #[error("Page load failed: {0}")]
    PageLoad(String),

    /// A page failed to produce its element or a lifecycle hook failed.
    #[error("Render failed: {0}")]
    Render(String),

    /// A route references a page name with no registered factory.
    #[error("Unknown page '{page}' for route {pattern}")]
    UnknownPage { pattern: String, page: String },

    /// The navigator behind a handle has stopped.
    #[error("Navigator is no longer running")]
    Closed,
}

/// Result type for navigation operations.
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Opaque output of a page, handed to the document container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub markup: String,
}

impl Element {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

/// Identifies an element mounted in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// A page was rendered and mounted.
    Rendered { path: String, element: ElementId },

    /// No route matched; nothing changed.
    NoMatch { path: String },
}

impl Navigation {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Navigation::Rendered { .. })
    }
}
