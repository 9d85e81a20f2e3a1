//! Route file watcher for hot reload.
//!
//! Every modify or create event on the watched file reloads it. Configs that
//! fail to load or validate are logged and dropped; subscribers only ever
//! receive validated configs.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::RouterConfig;

/// Watches a route file and forwards reloaded configs.
pub struct ConfigWatcher {
    path: PathBuf,
    updates: mpsc::UnboundedSender<RouterConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiving end for reloaded configs.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RouterConfig>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            updates,
        };
        (watcher, rx)
    }

    /// Start watching. Dropping the returned handle stops the watch.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self { path, updates } = self;
        let watched = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if triggers_reload(&event.kind) => {
                    reload(&path, &updates);
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Route file watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&watched, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?watched, "Route file watcher started");
        Ok(watcher)
    }
}

fn triggers_reload(kind: &EventKind) -> bool {
    kind.is_modify() || kind.is_create()
}

/// Load `path` and forward it. Returns whether a config was sent.
fn reload(path: &Path, updates: &mpsc::UnboundedSender<RouterConfig>) -> bool {
    match load_config(path) {
        Ok(config) => {
            tracing::info!(path = ?path, routes = config.routes.len(), "Route file reloaded");
            updates.send(config).is_ok()
        }
        Err(e) => {
            tracing::error!(path = ?path, error = %e, "Route file rejected; keeping current routes");
            false
        }
    }
}
