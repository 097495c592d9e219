//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the shell, and
//! translates keyboard/mouse events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm event → TuiEvent → handle_tui_event() → Action → update() → Effect
//!                                                                         │
//!                              Action::ViewLoaded ◀── spawn_view_load() ◀─┘
//! ```
//!
//! All state mutation happens on this thread. Deferred view loads run as
//! tokio tasks and report back over a channel, so the shell stays responsive
//! (collapse, further navigation) while a load is pending.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or finished loads.

mod component;
pub mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::resolver::{self, LoadRequest};
use crate::core::route::RouteTable;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{LocationEvent, LocationPromptState, MenuEvent, SiderState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

/// Which region receives routed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sider,
    Content,
}

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    pub focus: Focus,
    pub sider: SiderState,
    /// Location prompt overlay (None = hidden)
    pub location: Option<LocationPromptState>,
}

impl TuiState {
    pub fn new(table: &RouteTable) -> Self {
        Self {
            focus: Focus::Sider,
            sider: SiderState::new(table),
            location: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Show);
    }
}

pub fn run(config: ResolvedConfig, table: RouteTable) -> std::io::Result<()> {
    let table = Arc::new(table);
    let mut app = App::from_config(Arc::clone(&table), &config);
    let mut tui = TuiState::new(&table);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background loads
    let (tx, rx) = mpsc::channel();

    // First navigation: current path is unset until this lands
    info!("Initial navigation to {:?}", config.initial_route);
    dispatch(&mut app, &mut tui, Action::Navigate(config.initial_route.clone()), &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.content.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_tui_event(&mut tui, &app, event, frame_area)
                && dispatch(&mut app, &mut tui, action, &tx)
            {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Handle finished background loads
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Apply an action and carry out its effect. Returns true when the shell should exit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let moves = matches!(
        action,
        Action::Navigate(_) | Action::Back | Action::Forward
    );
    let effect = update(app, action);

    // Keep the menu cursor on the highlighted entry after any path change
    if moves && let Some(path) = app.nav.current_path.as_deref() {
        tui.sider.follow(path);
    }

    match effect {
        Effect::None => false,
        Effect::LoadView(request) => {
            spawn_view_load(request, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

/// Translate a terminal event into an action, updating presentation state on the way.
pub(crate) fn handle_tui_event(
    tui: &mut TuiState,
    app: &App,
    event: TuiEvent,
    frame_area: Rect,
) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::ToggleCollapse => return Some(Action::ToggleCollapse),
        _ => {}
    }

    // When the location prompt is open, route all events to it
    if let Some(prompt) = tui.location.as_mut() {
        let location_event = prompt.handle_event(&event)?;
        tui.location = None;
        return match location_event {
            LocationEvent::Submit(path) => Some(Action::Navigate(path)),
            LocationEvent::Dismiss => None,
        };
    }

    match event {
        TuiEvent::OpenLocation | TuiEvent::InputChar(':') => {
            tui.location = Some(LocationPromptState::new(app.nav.current_path.as_deref()));
            None
        }
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::Forward => Some(Action::Forward),
        TuiEvent::FocusNext => {
            tui.focus = match tui.focus {
                Focus::Sider => Focus::Content,
                Focus::Content => Focus::Sider,
            };
            None
        }
        TuiEvent::MouseClick(col, row) => {
            let item_count = app.table.entries().len();
            match ui::hit_test(col, row, frame_area, app.nav.collapsed, item_count)? {
                Hit::Toggle => Some(Action::ToggleCollapse),
                Hit::MenuItem(index) => {
                    tui.focus = Focus::Sider;
                    tui.sider.cursor = index;
                    let key = tui.sider.key_at(index)?.to_string();
                    Some(Action::Navigate(key))
                }
                Hit::Content => {
                    tui.focus = Focus::Content;
                    None
                }
            }
        }
        event => match tui.focus {
            Focus::Sider => match tui.sider.handle_event(&event)? {
                MenuEvent::Select(key) => Some(Action::Navigate(key)),
            },
            Focus::Content => match event {
                TuiEvent::Escape => {
                    tui.focus = Focus::Sider;
                    None
                }
                TuiEvent::InputChar(c) => Some(Action::ViewKey(c)),
                _ => None,
            },
        },
    }
}

fn spawn_view_load(request: LoadRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning view load for {}", request.path);
    tokio::spawn(async move {
        let outcome = resolver::load(request).await;
        let path = outcome.path.clone();
        if tx.send(Action::ViewLoaded(outcome)).is_err() {
            warn!("Failed to deliver loaded view for {}: receiver dropped", path);
        }
    });
}
