//! Navigation metrics.
//!
//! # Metrics
//! - `router_navigations_total` (counter): navigations by outcome
//!   (`rendered`, `no_match`, `failed`)
//! - `router_navigation_duration_seconds` (histogram): resolve + render time
//! - `router_routes` (gauge): size of the current route table
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the embedding application
//!   installs a recorder if it wants them exported

use std::time::Instant;

/// Record one navigation and its duration.
pub fn record_navigation(outcome: &'static str, start: Instant) {
    ::metrics::counter!("router_navigations_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("router_navigation_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

/// Record the number of routes in the active table.
pub fn record_route_table_size(routes: usize) {
    ::metrics::gauge!("router_routes").set(routes as f64);
}
