use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::header::TRIGGER_WIDTH;
use crate::tui::components::sider::{self, COLLAPSED_WIDTH, EXPANDED_WIDTH};
use crate::tui::components::{ContentPane, Header, LocationPrompt, Sider};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub sider: Rect,
    pub header: Rect,
    pub content: Rect,
}

/// Side panel on the left; header above the content on the right.
pub fn shell_areas(area: Rect, collapsed: bool) -> ShellAreas {
    use Constraint::{Length, Min};
    let sider_width = if collapsed {
        COLLAPSED_WIDTH
    } else {
        EXPANDED_WIDTH
    };
    let [sider, main] = Layout::horizontal([Length(sider_width), Min(0)]).areas(area);
    let [header, content] = Layout::vertical([Length(1), Min(0)]).areas(main);
    ShellAreas {
        sider,
        header,
        content,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let areas = shell_areas(frame.area(), app.nav.collapsed);

    Sider::new(
        &app.table,
        &app.nav,
        &tui.sider,
        tui.focus == Focus::Sider,
    )
    .render(frame, areas.sider);

    Header::new(
        app.nav.collapsed,
        app.nav.current_path.clone(),
        app.status_message.clone(),
        app.history.can_go_back(),
        app.history.can_go_forward(),
    )
    .render(frame, areas.header);

    ContentPane::new(&app.content, tui.focus == Focus::Content, spinner_frame)
        .render(frame, areas.content);

    if let Some(prompt) = &tui.location {
        LocationPrompt::new(prompt).render(frame, frame.area());
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    MenuItem(usize),
    Toggle,
    Content,
}

/// Hit test: given a screen position, find which part of the shell is under it.
pub fn hit_test(
    col: u16,
    row: u16,
    frame_area: Rect,
    collapsed: bool,
    item_count: usize,
) -> Option<Hit> {
    let areas = shell_areas(frame_area, collapsed);
    let inside = |r: Rect| col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;

    if inside(areas.sider) {
        return sider::item_at(areas.sider, row, item_count).map(Hit::MenuItem);
    }
    if inside(areas.header) {
        return (col < areas.header.x + TRIGGER_WIDTH).then_some(Hit::Toggle);
    }
    if inside(areas.content) {
        return Some(Hit::Content);
    }
    None
}
