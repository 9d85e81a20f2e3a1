//! Document container abstraction.
//!
//! # Responsibilities
//! - Mount the element produced by a page
//! - Remove the element of the page being replaced
//! - Toggle the active marker on links pointing at the current path

use std::collections::BTreeMap;

use crate::navigation::types::{Element, ElementId};

/// Container the navigator renders into.
pub trait Document: Send {
    /// Append `element` to the container.
    fn append(&mut self, element: Element) -> ElementId;

    /// Remove a previously appended element. Unknown ids are ignored.
    fn remove(&mut self, id: ElementId);

    /// Mark every link targeting `path` as active or inactive.
    fn set_link_active(&mut self, path: &str, active: bool);
}

/// In-process document: a list of mounted elements and a set of links.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    next_id: u64,
    mounted: Vec<(ElementId, Element)>,
    links: BTreeMap<String, bool>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a link whose target is `path`.
    pub fn with_link(mut self, path: impl Into<String>) -> Self {
        self.links.insert(path.into(), false);
        self
    }

    /// Elements currently mounted, in mount order.
    pub fn mounted(&self) -> impl Iterator<Item = &Element> {
        self.mounted.iter().map(|(_, element)| element)
    }

    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    /// Concatenated markup of every mounted element.
    pub fn markup(&self) -> String {
        self.mounted().map(|element| element.markup.as_str()).collect()
    }

    pub fn is_link_active(&self, path: &str) -> bool {
        self.links.get(path).copied().unwrap_or(false)
    }

    pub fn active_links(&self) -> Vec<&str> {
        self.links
            .iter()
            .filter(|(_, active)| **active)
            .map(|(path, _)| path.as_str())
            .collect()
    }
}

impl Document for MemoryDocument {
    fn append(&mut self, element: Element) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.mounted.push((id, element));
        id
    }

    fn remove(&mut self, id: ElementId) {
        self.mounted.retain(|(mounted, _)| *mounted != id);
    }

    fn set_link_active(&mut self, path: &str, active: bool) {
        if let Some(state) = self.links.get_mut(path) {
            *state = active;
        }
    }
}
