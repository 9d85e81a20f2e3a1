//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Requested path (link click, history entry, explicit push)
//!     → router.rs (visit every registered route)
//!     → matcher.rs (walk path and pattern segment by segment)
//!     → Return: ResolvedRoute (path, page factory, merged state) or None
//!
//! Untyped input:
//!     boundary.rs (reject non-strings) → matcher.rs / router.rs
//! ```
//!
//! # Design Decisions
//! - Pure and synchronous: no logging, no shared mutable state
//! - Route table is supplied once and never mutated here
//! - Last match wins (registration order), not first match or specificity
//! - No match is a normal `None`, not an error

pub mod boundary;
pub mod matcher;
pub mod router;
pub mod types;

pub use matcher::{extract_parameter, has_continuation_after_first_slash, recursive_match};
pub use router::{resolve, ResolvedRoute, Route, RouteTable};
pub use types::{MatchResult, ParameterMap, RoutingError, RoutingResult, StateMap};
