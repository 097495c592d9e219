//! # Selection Synchronizer
//!
//! Derives the side panel's highlighted key from the current path. Menu clicks
//! and history moves both change `current_path` only; this module is the single
//! place `selected_keys` is written, so the two can never disagree.

use std::collections::BTreeSet;

use crate::core::navigation::NavigationState;
use crate::core::route::RouteTable;

/// Exactly one key when `current_path` is registered, none otherwise.
pub fn derive_selected_keys(table: &RouteTable, current_path: Option<&str>) -> BTreeSet<String> {
    current_path
        .and_then(|path| table.lookup(path).ok())
        .map(|entry| BTreeSet::from([entry.key.clone()]))
        .unwrap_or_default()
}

/// Recompute `nav.selected_keys` from `nav.current_path`.
pub fn sync(nav: &mut NavigationState, table: &RouteTable) {
    nav.selected_keys = derive_selected_keys(table, nav.current_path.as_deref());
}
