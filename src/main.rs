//! spa-router command line.
//!
//! # Architecture Overview
//!
//! ```text
//!     routes.toml ──▶ config (load + validate) ──▶ PageRegistry ──▶ RouteTable
//!                                                                      │
//!     path ───────────────────────────────────────────▶ routing::resolve
//!                                                                      │
//!                                                                      ▼
//!                                      Navigator (history, document, page lifecycle)
//! ```
//!
//! Subcommands:
//! - `resolve`: print the resolved route for each path as JSON
//! - `navigate`: navigate through each path in order, printing the mounted markup
//! - `watch`: read paths from stdin and navigate; reload routes when the file changes

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use spa_router::config::load_config;
use spa_router::config::watcher::ConfigWatcher;
use spa_router::lifecycle::signals::shutdown_signal;
use spa_router::lifecycle::startup::{prepare, Bootstrap};
use spa_router::lifecycle::Shutdown;
use spa_router::navigation::{MemoryDocument, MemoryHistory, Navigation, Navigator, PageRegistry};
use spa_router::observability::logging::init_logging;
use spa_router::routing::RouteTable;

#[derive(Parser)]
#[command(name = "spa-router")]
#[command(about = "Resolve and navigate client-side routes from a TOML route table", long_about = None)]
struct Cli {
    /// Route table configuration file.
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths and print the matching route and merged state
    Resolve { paths: Vec<String> },
    /// Navigate through paths in order, printing the mounted markup
    Navigate { paths: Vec<String> },
    /// Navigate to paths read from stdin, reloading routes on file change
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability.log_level);

    tracing::info!(config = ?cli.config, "spa-router v{} starting", env!("CARGO_PKG_VERSION"));

    let boot = prepare(config)?;

    match cli.command {
        Commands::Resolve { paths } => resolve_paths(&boot, &paths)?,
        Commands::Navigate { paths } => navigate_paths(boot, &paths).await?,
        Commands::Watch => watch(boot, cli.config).await?,
    }

    Ok(())
}

fn resolve_paths(boot: &Bootstrap, paths: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for path in paths {
        let output = match boot.routes.resolve(path) {
            Some(route) => json!({
                "path": route.path,
                "pattern": route.pattern,
                "lazy": route.page.is_lazy(),
                "state": route.state,
            }),
            None => json!({ "path": path, "pattern": null }),
        };
        println!("{}", serde_json::to_string(&output)?);
    }
    Ok(())
}

async fn navigate_paths(boot: Bootstrap, paths: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let history = MemoryHistory::new(boot.config.navigation.initial_path.clone());
    let mut navigator = Navigator::new(boot.routes, history, MemoryDocument::new());

    let outcome = navigator.start().await?;
    report(&navigator, outcome);
    for path in paths {
        let outcome = navigator.push(path).await?;
        report(&navigator, outcome);
    }
    Ok(())
}

async fn watch(boot: Bootstrap, config_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let shutdown = Shutdown::new();

    let (watcher, mut config_updates) = ConfigWatcher::new(&config_path);
    let _watcher = watcher.run()?;

    // Rebuild the route table for every reloaded config.
    let (table_tx, table_rx) = mpsc::unbounded_channel::<RouteTable>();
    tokio::spawn(async move {
        while let Some(config) = config_updates.recv().await {
            match PageRegistry::from_config(&config).build_table(&config.routes) {
                Ok(table) => {
                    if table_tx.send(table).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::error!(error = %e, "Reloaded config rejected; keeping current routes"),
            }
        }
    });

    let history = MemoryHistory::new(boot.config.navigation.initial_path.clone());
    let mut navigator = Navigator::new(boot.routes, history, MemoryDocument::new());
    let outcome = navigator.start().await?;
    report(&navigator, outcome);

    let handle = navigator.handle();
    let navigator_shutdown = shutdown.subscribe();
    let task = tokio::spawn(async move {
        navigator.run(table_rx, navigator_shutdown).await;
        navigator
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) if !line.trim().is_empty() => handle.push(line.trim())?,
                    Some(_) => {}
                    None => break,
                }
            }
            _ = shutdown_signal() => break,
        }
    }

    shutdown.trigger();
    let navigator = task.await?;
    println!("{}", navigator.document().markup());
    Ok(())
}

fn report(navigator: &Navigator<MemoryHistory, MemoryDocument>, outcome: Navigation) {
    match outcome {
        Navigation::Rendered { path, .. } => {
            println!("{path} => {}", navigator.document().markup());
        }
        Navigation::NoMatch { path } => println!("{path} => (no match)"),
    }
}
