//! Client-side route matching and page navigation.

pub mod config;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use lifecycle::Shutdown;
pub use navigation::Navigator;
pub use routing::{resolve, Route, RouteTable};
