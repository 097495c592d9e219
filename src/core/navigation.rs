//! # Navigation State
//!
//! The only mutable entity of the navigation core. Owned by the shell and
//! changed exclusively through `update()`; the route table and the resolver
//! never touch it.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// `None` until the first navigation lands.
    pub current_path: Option<String>,
    pub collapsed: bool,
    /// Highlighted menu keys. Always derived from `current_path` by the selection synchronizer.
    pub selected_keys: BTreeSet<String>,
}

impl NavigationState {
    pub fn new(collapsed: bool) -> Self {
        Self {
            current_path: None,
            collapsed,
            selected_keys: BTreeSet::new(),
        }
    }

    /// Flip between collapsed and expanded. Leaves path and selection alone.
    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_keys.contains(key)
    }
}
