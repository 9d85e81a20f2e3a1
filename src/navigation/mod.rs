//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! push(path) / click(link) / RouterHandle::push
//!     → navigator.rs (resolve against current RouteTable snapshot)
//!     → No match: return NoMatch, nothing else happens
//!     → Match:
//!         page.rs      destroy current page, unmount its element
//!         history.rs   push entry (path, merged state)
//!         document.rs  move active marker to links for the new path
//!         page.rs      build page (await loader if lazy)
//!                      before_render_element → to_html → mount → after_render_element
//!
//! Route table reload:
//!     config watcher → registry.rs (build RouteTable) → navigator (atomic swap)
//! ```
//!
//! # Design Decisions
//! - Host coupling (history, container) lives behind traits; memory
//!   implementations back tests and the CLI
//! - Pages navigate through a `RouterHandle`, never through the navigator

pub mod document;
pub mod handle;
pub mod history;
pub mod navigator;
pub mod page;
pub mod registry;
pub mod template;
pub mod types;

pub use document::{Document, MemoryDocument};
pub use handle::RouterHandle;
pub use history::{History, MemoryHistory};
pub use navigator::Navigator;
pub use page::{Page, PageConstructor, PageFactory, PageLoader, PageParams};
pub use registry::PageRegistry;
pub use template::TemplatePage;
pub use types::{Element, ElementId, Navigation, NavigationError, NavigationResult};
