//! Routing types and error definitions.

use std::collections::HashMap;

use thiserror::Error;

/// Parameter name → literal text captured from the concrete path.
pub type ParameterMap = HashMap<String, String>;

/// Route-declared static state, and the merged state of a resolved route.
pub type StateMap = HashMap<String, String>;

/// Marker that opens a dynamic segment inside a pattern.
pub const DYNAMIC_MARKER: &str = "/:";

/// Errors raised by the routing core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// An argument that must be a string was something else.
    #[error("The {parameter} should only be a string, not a {actual}")]
    InvalidArgument {
        parameter: &'static str,
        actual: &'static str,
    },
}

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;

/// Outcome of comparing one concrete path with one pattern.
///
/// Produced even when the match fails; `parameters` then holds whatever was
/// captured before the walk diverged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    pub parameters: ParameterMap,
}
