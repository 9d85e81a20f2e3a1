//! Navigation spans.
//!
//! Every navigation runs inside a span carrying a fresh navigation id, so
//! the events of one navigation (resolve, lifecycle hooks, errors) can be
//! correlated.

use uuid::Uuid;

/// Span for a navigation to `path`.
pub fn navigation_span(path: &str) -> ::tracing::Span {
    let navigation_id = Uuid::new_v4();
    ::tracing::info_span!("navigation", navigation_id = %navigation_id, path = %path)
}

