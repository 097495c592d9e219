//! # Location Prompt
//!
//! One-line overlay for typing a path directly, the terminal stand-in for a
//! browser's address bar. Submitting emits the raw text; the shell treats it
//! as direct URL entry, so unknown paths redirect to the default route.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

pub struct LocationPromptState {
    pub input: String,
}

/// Events emitted by the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationEvent {
    Submit(String),
    Dismiss,
}

impl LocationPromptState {
    /// Start pre-filled with the current path.
    pub fn new(current: Option<&str>) -> Self {
        Self {
            input: current.unwrap_or("/").to_string(),
        }
    }
}

impl EventHandler for LocationPromptState {
    type Event = LocationEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<LocationEvent> {
        match event {
            TuiEvent::Escape => Some(LocationEvent::Dismiss),
            TuiEvent::Submit => Some(LocationEvent::Submit(self.input.trim().to_string())),
            TuiEvent::Backspace => {
                self.input.pop();
                None
            }
            TuiEvent::InputChar(c) => {
                self.input.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                self.input.extend(text.chars().filter(|c| !c.is_control()));
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the prompt overlay.
pub struct LocationPrompt<'a> {
    state: &'a LocationPromptState,
}

impl<'a> LocationPrompt<'a> {
    pub fn new(state: &'a LocationPromptState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = prompt_rect(area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Go to ")
            .title_bottom(Line::from(" Enter Go  Esc Cancel ").centered());

        let line = Line::from(vec![
            Span::raw(self.state.input.clone()),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), overlay);
    }
}

/// Three rows tall, 60% wide, a third of the way down.
fn prompt_rect(outer: Rect) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Percentage(33),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage(20),
        Constraint::Percentage(60),
        Constraint::Percentage(20),
    ])
    .areas(row);
    center
}
