//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build page registry → Build route table
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop navigator loop → Drop config watcher → Exit
//!
//! Signals (signals.rs):
//!     SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then registry, then navigator
//! - Config reload happens through the file watcher, not signals

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
