//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`.
//! User picks a menu entry? That's `Action::Navigate(key)`.
//! A deferred view finishes loading? That's `Action::ViewLoaded(outcome)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the adapter must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! `navigate()` is the only code path that changes `current_path`. Menu
//! clicks, typed locations, and history moves all funnel through it.

use std::sync::Arc;

use log::{debug, info};

use crate::core::resolver::{Completion, LoadOutcome, LoadRequest, ResolveStep};
use crate::core::selection;
use crate::core::state::{App, ContentState};

#[derive(Debug)]
pub enum Action {
    /// Menu selection, typed location, or programmatic request.
    Navigate(String),
    /// External path change: one step back in history.
    Back,
    /// External path change: one step forward in history.
    Forward,
    ToggleCollapse,
    /// A background load finished.
    ViewLoaded(LoadOutcome),
    /// Key typed while the content region has focus.
    ViewKey(char),
    Quit,
}

#[derive(Debug)]
pub enum Effect {
    None,
    /// Spawn `resolver::load(request)` and feed the outcome back as `ViewLoaded`.
    LoadView(LoadRequest),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Keep,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(path) => navigate(app, &path, HistoryMode::Push),
        Action::Back => match app.history.back() {
            Some(path) => navigate(app, &path, HistoryMode::Keep),
            None => {
                app.status_message = String::from("No earlier page");
                Effect::None
            }
        },
        Action::Forward => match app.history.forward() {
            Some(path) => navigate(app, &path, HistoryMode::Keep),
            None => {
                app.status_message = String::from("No later page");
                Effect::None
            }
        },
        Action::ToggleCollapse => {
            app.nav.toggle_collapse();
            debug!("Side panel collapsed={}", app.nav.collapsed);
            Effect::None
        }
        Action::ViewLoaded(outcome) => {
            match app.resolver.complete(outcome) {
                Completion::Ready(view) => {
                    app.content = ContentState::Ready(view);
                    app.status_message.clear();
                }
                Completion::Failed { path, error } => {
                    app.status_message = format!("Failed to load {path}");
                    app.content = ContentState::Failed { path, error };
                }
                Completion::Superseded => {}
            }
            Effect::None
        }
        Action::ViewKey(key) => {
            if let ContentState::Ready(resolved) = &mut app.content
                && resolved.view.handle_key(key)
            {
                debug!("View {} handled key {:?}", resolved.path, key);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn navigate(app: &mut App, requested: &str, mode: HistoryMode) -> Effect {
    let table = Arc::clone(&app.table);
    let resolution = table.resolve(requested);
    let entry = resolution.entry();

    // Unknown locations land on the default entry without a notice
    if resolution.is_redirect() {
        info!("Redirecting {:?} to {}", requested, entry.path);
    }
    app.status_message.clear();

    if mode == HistoryMode::Push {
        app.history.push(&entry.path);
    }

    if app.nav.current_path.as_deref() == Some(entry.path.as_str())
        && app.content.is_settled_for(&entry.path)
    {
        debug!("Already at {}, nothing to do", entry.path);
        return Effect::None;
    }

    info!("Navigating to {}", entry.path);
    app.nav.current_path = Some(entry.path.clone());
    selection::sync(&mut app.nav, &table);

    match app.resolver.request(entry) {
        ResolveStep::Ready(view) => {
            app.content = ContentState::Ready(view);
            Effect::None
        }
        ResolveStep::Load(request) => {
            app.content = ContentState::Loading {
                path: entry.path.clone(),
            };
            app.status_message = format!("Loading {}", entry.path);
            Effect::LoadView(request)
        }
        ResolveStep::Attached(_) => {
            app.content = ContentState::Loading {
                path: entry.path.clone(),
            };
            app.status_message = format!("Loading {}", entry.path);
            Effect::None
        }
    }
}
