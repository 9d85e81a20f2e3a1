//! Route lookup over the registered table.
//!
//! # Responsibilities
//! - Store the registered routes in registration order
//! - Run the segment matcher against every route for a requested path
//! - Return the resolved route or an explicit no-match (`None`)
//!
//! # Design Decisions
//! - Immutable after construction; a new table replaces the old one whole
//! - Every route is visited, no early exit
//! - Last matching route wins: a later registration overrides an earlier one
//! - Extracted parameters override the route's static state on key collision

use crate::navigation::page::PageFactory;
use crate::routing::matcher::recursive_match;
use crate::routing::types::StateMap;

/// A registered route: pattern, page factory and static state.
#[derive(Debug, Clone)]
pub struct Route {
    /// Pattern such as `/user/:name`.
    pub pattern: String,

    /// Builds the page once the route is resolved.
    pub page: PageFactory,

    /// Static state merged into every resolution of this route.
    pub state: StateMap,
}

impl Route {
    /// Create a route with no static state.
    pub fn new(pattern: impl Into<String>, page: PageFactory) -> Self {
        Self {
            pattern: pattern.into(),
            page,
            state: StateMap::new(),
        }
    }

    /// Attach static state to the route.
    pub fn with_state<K, V>(mut self, state: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.state
            .extend(state.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// A route that matched a requested path.
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    /// The path as requested.
    pub path: String,

    /// Pattern of the winning route.
    pub pattern: String,

    pub page: PageFactory,

    /// Static state overlaid with the extracted parameters.
    pub state: StateMap,
}

/// Ordered, read-only route table.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve `path` against this table.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        resolve(path, &self.routes)
    }
}

impl From<Vec<Route>> for RouteTable {
    fn from(routes: Vec<Route>) -> Self {
        Self::new(routes)
    }
}

impl FromIterator<Route> for RouteTable {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Resolve `path` against `routes`; the last matching route wins.
pub fn resolve(path: &str, routes: &[Route]) -> Option<ResolvedRoute> {
    routes.iter().fold(None, |resolved, route| {
        let result = recursive_match(path, &route.pattern);
        if !result.matched {
            return resolved;
        }

        let mut state = route.state.clone();
        state.extend(result.parameters);

        Some(ResolvedRoute {
            path: path.to_string(),
            pattern: route.pattern.clone(),
            page: route.page.clone(),
            state,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::template::TemplatePage;

    fn route(pattern: &str) -> Route {
        Route::new(pattern, TemplatePage::factory(pattern))
    }

    #[test]
    fn test_no_match() {
        let routes = vec![route("/"), route("/about")];
        assert!(resolve("/contact", &routes).is_none());
    }

    #[test]
    fn test_static_match() {
        let routes = vec![route("/"), route("/about")];
        let resolved = resolve("/about", &routes).unwrap();
        assert_eq!(resolved.path, "/about");
        assert_eq!(resolved.pattern, "/about");
        assert!(resolved.state.is_empty());
    }

    #[test]
    fn test_last_match_wins() {
        let routes = vec![
            route("/user/:id").with_state([("source", "first")]),
            route("/user/:name").with_state([("source", "second")]),
        ];

        let resolved = resolve("/user/42", &routes).unwrap();
        assert_eq!(resolved.pattern, "/user/:name");
        assert_eq!(resolved.state.get("source").unwrap(), "second");
        assert_eq!(resolved.state.get("name").unwrap(), "42");
        assert!(!resolved.state.contains_key("id"));
    }

    #[test]
    fn test_later_non_matching_route_does_not_clear() {
        let routes = vec![route("/user/:id"), route("/about")];
        let resolved = resolve("/user/7", &routes).unwrap();
        assert_eq!(resolved.pattern, "/user/:id");
    }

    #[test]
    fn test_parameters_override_static_state() {
        let routes = vec![route("/user/:name").with_state([("name", "static"), ("tab", "info")])];

        let resolved = resolve("/user/Ikrom", &routes).unwrap();
        assert_eq!(resolved.state.get("name").unwrap(), "Ikrom");
        assert_eq!(resolved.state.get("tab").unwrap(), "info");
    }

    #[test]
    fn test_table_resolve() {
        let table: RouteTable = vec![route("/"), route("/post/:slug")].into();
        assert_eq!(table.len(), 2);
        let resolved = table.resolve("/post/hello").unwrap();
        assert_eq!(resolved.state.get("slug").unwrap(), "hello");
    }
}
