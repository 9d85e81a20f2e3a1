//! History entry abstraction.
//!
//! # Responsibilities
//! - Report the current pathname (used for the initial navigation)
//! - Record the entry pushed for each rendered route
//! - Expose the state of the current entry to pages
//!
//! # Design Decisions
//! - Only the current entry matters; back/forward is left to the host
//! - The navigator never reads ambient globals, only this trait

use crate::routing::types::StateMap;

/// Host history the navigator writes entries to.
pub trait History: Send {
    /// Pathname of the current entry.
    fn pathname(&self) -> String;

    /// Push a new entry for `path` carrying `state`.
    fn push_state(&mut self, state: StateMap, path: &str);

    /// State of the current entry.
    fn state(&self) -> StateMap;
}

/// In-process history holding the current entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    pathname: String,
    state: StateMap,
    entries_pushed: usize,
}

impl MemoryHistory {
    /// Start at `pathname` with empty state.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Number of entries pushed so far.
    pub fn entries_pushed(&self) -> usize {
        self.entries_pushed
    }
}

impl History for MemoryHistory {
    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn push_state(&mut self, state: StateMap, path: &str) {
        self.pathname = path.to_string();
        self.state = state;
        self.entries_pushed += 1;
    }

    fn state(&self) -> StateMap {
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_replaces_current_entry() {
        let mut history = MemoryHistory::new("/");
        assert_eq!(history.pathname(), "/");
        assert!(history.state().is_empty());

        let state: StateMap = [("id".to_string(), "7".to_string())].into_iter().collect();
        history.push_state(state.clone(), "/user/7");

        assert_eq!(history.pathname(), "/user/7");
        assert_eq!(history.state(), state);
        assert_eq!(history.entries_pushed(), 1);
    }
}
