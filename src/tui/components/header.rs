//! # Header Component
//!
//! Single-line bar above the content region.
//!
//! ## Responsibilities
//!
//! - Show the collapse trigger (`«` folds the side panel, `»` unfolds it)
//! - Show the current path and back/forward availability
//! - Show status messages (e.g., "Loading /use-effect", redirect notices)
//!
//! ## Stateless Component
//!
//! Header is purely presentational. It receives all data as props and has no
//! internal state. The trigger glyph occupies the first `TRIGGER_WIDTH` columns;
//! `ui::hit_test` uses that to turn a click there into a collapse toggle.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Columns taken by the collapse trigger, including padding.
pub const TRIGGER_WIDTH: u16 = 3;

pub struct Header {
    pub collapsed: bool,
    pub current_path: Option<String>,
    pub status_message: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl Header {
    pub fn new(
        collapsed: bool,
        current_path: Option<String>,
        status_message: String,
        can_go_back: bool,
        can_go_forward: bool,
    ) -> Self {
        Self {
            collapsed,
            current_path,
            status_message,
            can_go_back,
            can_go_forward,
        }
    }

    fn trigger_glyph(&self) -> &'static str {
        if self.collapsed { "»" } else { "«" }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let arrow = |enabled: bool, glyph: &'static str| {
            if enabled {
                Span::styled(glyph, Style::default().fg(Color::Gray))
            } else {
                Span::styled(glyph, dim)
            }
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.trigger_glyph()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            arrow(self.can_go_back, "‹"),
            arrow(self.can_go_forward, "›"),
            Span::raw(" "),
            Span::styled(
                self.current_path.clone().unwrap_or_default(),
                Style::default().fg(Color::Cyan),
            ),
        ];

        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", dim));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
