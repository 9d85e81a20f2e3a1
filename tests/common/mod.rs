//! Shared utilities for navigation integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use spa_router::navigation::{Element, NavigationError, NavigationResult, Page, PageFactory, PageParams};
use spa_router::routing::{Route, RouteTable};
use spa_router::navigation::TemplatePage;

/// Ordered record of page lifecycle calls.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Page that writes every hook call to a journal.
pub struct RecordingPage {
    name: String,
    journal: Journal,
    params: PageParams,
}

impl RecordingPage {
    pub fn factory(name: &str, journal: &Journal) -> PageFactory {
        let name = name.to_string();
        let journal = journal.clone();
        PageFactory::simple(move |params| {
            journal.record(format!("{name}:new"));
            RecordingPage {
                name: name.clone(),
                journal: journal.clone(),
                params,
            }
        })
    }
}

impl Page for RecordingPage {
    fn to_html(&mut self) -> BoxFuture<'_, NavigationResult<Element>> {
        self.journal.record(format!("{}:to_html", self.name));
        let mut keys: Vec<_> = self.params.state_history.keys().cloned().collect();
        keys.sort();
        let markup = format!("<{}>{}</{}>", self.name, keys.join(","), self.name);
        async move { Ok(Element::new(markup)) }.boxed()
    }

    fn destroy(&mut self) -> BoxFuture<'_, NavigationResult<()>> {
        self.journal.record(format!("{}:destroy", self.name));
        async { Ok(()) }.boxed()
    }

    fn before_render_element(&mut self) -> BoxFuture<'_, NavigationResult<()>> {
        self.journal.record(format!("{}:before_render", self.name));
        async { Ok(()) }.boxed()
    }

    fn after_render_element(&mut self) -> BoxFuture<'_, NavigationResult<()>> {
        self.journal.record(format!("{}:after_render", self.name));
        async { Ok(()) }.boxed()
    }
}

/// Page whose render always fails.
pub struct BrokenPage;

impl Page for BrokenPage {
    fn to_html(&mut self) -> BoxFuture<'_, NavigationResult<Element>> {
        async { Err(NavigationError::Render("template missing".into())) }.boxed()
    }
}

pub fn broken_factory() -> PageFactory {
    PageFactory::simple(|_| BrokenPage)
}

/// A small site: home, about and a user profile.
pub fn sample_table() -> RouteTable {
    vec![
        Route::new("/", TemplatePage::factory("<h1>Home</h1>")),
        Route::new("/about", TemplatePage::factory("<h1>About</h1>")),
        Route::new("/user/:name", TemplatePage::factory("<h1>{name}</h1>"))
            .with_state([("section", "users")]),
    ]
    .into()
}
