//! # Sider Component
//!
//! Collapsible side panel listing the route table as a menu.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SiderState` lives in `TuiState` and owns the hover cursor
//! - `Sider` is created each frame with borrowed props
//!
//! The cursor is *not* the selection. Up/Down only move the cursor; Enter (or
//! a click) emits `MenuEvent::Select(key)`, which the shell turns into a
//! navigation. The highlighted entry comes from `NavigationState::selected_keys`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::navigation::NavigationState;
use crate::core::route::RouteTable;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const EXPANDED_WIDTH: u16 = 24;
pub const COLLAPSED_WIDTH: u16 = 5;

/// Rows above the first menu item (brand line + spacer).
pub const MENU_TOP: u16 = 2;

/// Events emitted by the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    Select(String),
}

/// Persistent menu state.
pub struct SiderState {
    keys: Vec<String>,
    pub cursor: usize,
}

impl SiderState {
    pub fn new(table: &RouteTable) -> Self {
        Self {
            keys: table.entries().iter().map(|e| e.key.clone()).collect(),
            cursor: 0,
        }
    }

    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Move the cursor onto `key`, if it's a menu key.
    pub fn follow(&mut self, key: &str) {
        if let Some(index) = self.keys.iter().position(|k| k == key) {
            self.cursor = index;
        }
    }
}

impl EventHandler for SiderState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if !self.keys.is_empty() {
                    self.cursor = (self.cursor + 1).min(self.keys.len() - 1);
                }
                None
            }
            TuiEvent::Submit => self
                .key_at(self.cursor)
                .map(|key| MenuEvent::Select(key.to_string())),
            _ => None,
        }
    }
}

/// Menu row under `row`, given the sider's screen area.
pub fn item_at(area: Rect, row: u16, item_count: usize) -> Option<usize> {
    let first = area.y + MENU_TOP;
    if row < first || row >= area.y + area.height {
        return None;
    }
    let index = (row - first) as usize;
    (index < item_count).then_some(index)
}

/// Transient render wrapper for the side panel.
pub struct Sider<'a> {
    table: &'a RouteTable,
    nav: &'a NavigationState,
    state: &'a SiderState,
    focused: bool,
}

impl<'a> Sider<'a> {
    pub fn new(
        table: &'a RouteTable,
        nav: &'a NavigationState,
        state: &'a SiderState,
        focused: bool,
    ) -> Self {
        Self {
            table,
            nav,
            state,
            focused,
        }
    }
}

impl Component for Sider<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        let text_width = inner.width.saturating_sub(1) as usize;

        let brand = if self.nav.collapsed { "◆" } else { "◆ Hooks" };
        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {brand}"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (index, entry) in self.table.entries().iter().enumerate() {
            let selected = self.nav.is_selected(&entry.key);
            let hovered = self.focused && index == self.state.cursor;

            let text = if self.nav.collapsed {
                format!(" {}", entry.icon)
            } else {
                truncate_to_width(&format!(" {}  {}", entry.icon, entry.label), text_width)
            };
            let padded = format!("{text:<width$}", width = text_width);

            let mut style = if selected {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if hovered {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            let marker = if hovered { "›" } else { " " };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(padded, style),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Truncate to `max_width` display columns, adding "…" if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_table;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_rows(nav: &NavigationState, state: &SiderState, width: u16) -> Vec<String> {
        let table = sample_table();
        let backend = TestBackend::new(width, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                Sider::new(&table, nav, state, true).render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..6)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut state = SiderState::new(&sample_table());
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.cursor, 0);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_enter_emits_key_without_selecting() {
        let mut state = SiderState::new(&sample_table());
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(MenuEvent::Select("/use-effect".to_string()))
        );
    }

    #[test]
    fn test_follow_moves_cursor_to_key() {
        let mut state = SiderState::new(&sample_table());
        state.follow("/use-context");
        assert_eq!(state.cursor, 2);
        state.follow("/unknown");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_item_at() {
        let area = Rect::new(0, 1, 24, 10);
        assert_eq!(item_at(area, 1, 3), None);
        assert_eq!(item_at(area, 3, 3), Some(0));
        assert_eq!(item_at(area, 5, 3), Some(2));
        assert_eq!(item_at(area, 6, 3), None);
    }

    #[test]
    fn test_expanded_shows_labels() {
        let nav = NavigationState::new(false);
        let state = SiderState::new(&sample_table());
        let rows = render_rows(&nav, &state, EXPANDED_WIDTH);
        assert!(rows[0].contains("Hooks"));
        assert!(rows[2].contains("useState"));
        assert!(rows[4].contains("useContext"));
    }

    #[test]
    fn test_collapsed_shows_icons_only() {
        let nav = NavigationState::new(true);
        let state = SiderState::new(&sample_table());
        let rows = render_rows(&nav, &state, COLLAPSED_WIDTH);
        assert!(rows[2].contains('S'));
        assert!(!rows[2].contains("useState"));
    }

    #[test]
    fn test_selected_entry_is_highlighted() {
        let table = sample_table();
        let mut nav = NavigationState::new(false);
        nav.current_path = Some("/use-effect".to_string());
        crate::core::selection::sync(&mut nav, &table);
        let state = SiderState::new(&table);

        let backend = TestBackend::new(EXPANDED_WIDTH, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                Sider::new(&table, &nav, &state, false).render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(3, 3)].bg, Color::Blue);
        assert_ne!(buffer[(3, 2)].bg, Color::Blue);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a very long label", 6), "a ver…");
    }
}
