//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! navigation subsystem produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!     → tracing.rs (span per navigation with a navigation id)
//! ```
//!
//! # Design Decisions
//! - The routing core stays silent; only the navigator emits events
//! - Navigation id flows through every event of one navigation

pub mod logging;
pub mod metrics;
pub mod tracing;
