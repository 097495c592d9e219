//! # Application State
//!
//! Core navigation state for the shell. Domain logic only - no TUI types.
//! Presentation state (focus, menu cursor, prompt) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── table: Arc<RouteTable>      // static route configuration
//! ├── nav: NavigationState        // current path, collapse, selection
//! ├── resolver: ViewResolver      // module cache + pending navigation
//! ├── history: History            // back/forward stack
//! ├── content: ContentState       // what the content region shows
//! └── status_message: String      // header status text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::history::History;
use crate::core::navigation::NavigationState;
use crate::core::resolver::ViewResolver;
use crate::core::route::RouteTable;
use crate::core::view::{ResolvedView, ViewError};

/// What the content region currently holds.
#[derive(Debug, Default)]
pub enum ContentState {
    #[default]
    Empty,
    /// Waiting on a deferred load; render a placeholder.
    Loading { path: String },
    Ready(ResolvedView),
    /// Load failed; render an inline error. Navigation state is unaffected.
    Failed { path: String, error: ViewError },
}

impl ContentState {
    pub fn path(&self) -> Option<&str> {
        match self {
            ContentState::Empty => None,
            ContentState::Loading { path } | ContentState::Failed { path, .. } => Some(path),
            ContentState::Ready(view) => Some(&view.path),
        }
    }

    /// True when `path` is already shown or on its way. Failed content is never settled.
    pub fn is_settled_for(&self, path: &str) -> bool {
        matches!(self, ContentState::Loading { .. } | ContentState::Ready(_))
            && self.path() == Some(path)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ContentState::Loading { .. })
    }
}

pub struct App {
    pub table: Arc<RouteTable>,
    pub nav: NavigationState,
    pub resolver: ViewResolver,
    pub history: History,
    pub content: ContentState,
    pub status_message: String,
}

impl App {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self {
            table,
            nav: NavigationState::new(false),
            resolver: ViewResolver::default(),
            history: History::new(),
            content: ContentState::Empty,
            status_message: String::new(),
        }
    }

    /// Build an App from resolved config values.
    pub fn from_config(table: Arc<RouteTable>, config: &ResolvedConfig) -> Self {
        Self {
            nav: NavigationState::new(config.start_collapsed),
            resolver: ViewResolver::new(config.load_timeout),
            ..Self::new(table)
        }
    }
}
