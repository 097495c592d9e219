//! # Content Component
//!
//! The region the resolved view is rendered into. Shows one of:
//!
//! - a loading placeholder (spinner + target path) while a deferred load is pending
//! - the mounted view's body, styled by tone, with its key legend at the bottom
//! - an inline error box when the load failed (the shell keeps running)

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::state::ContentState;
use crate::core::view::Tone;
use crate::tui::component::Component;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ContentPane<'a> {
    content: &'a ContentState,
    focused: bool,
    spinner_frame: usize,
}

impl<'a> ContentPane<'a> {
    pub fn new(content: &'a ContentState, focused: bool, spinner_frame: usize) -> Self {
        Self {
            content,
            focused,
            spinner_frame,
        }
    }

    fn frame_block(&self, title: String) -> Block<'static> {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(
                format!(" {title} "),
                Style::default().add_modifier(Modifier::BOLD),
            ))
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Normal => Style::default(),
        Tone::Accent => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Tone::Muted => Style::default().fg(Color::DarkGray),
    }
}

impl Component for ContentPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.content {
            ContentState::Empty => {
                frame.render_widget(self.frame_block(String::new()), area);
            }
            ContentState::Loading { path } => {
                let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
                let block = self.frame_block(path.clone());
                let inner = block.inner(area);
                frame.render_widget(block, area);

                let [_, middle, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .areas(inner);
                let line = Line::from(vec![
                    Span::styled(spinner, Style::default().fg(Color::Yellow)),
                    Span::raw(format!(" Loading {path}")),
                ]);
                frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
            }
            ContentState::Failed { path, error } => {
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" ERROR ");
                let text = vec![
                    Line::from(Span::styled(
                        format!("Could not load {path}"),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::raw(error.to_string()),
                    Line::raw(""),
                    Line::from(Span::styled(
                        "Select the entry again to retry.",
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                frame.render_widget(
                    Paragraph::new(text)
                        .block(block)
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true }),
                    area,
                );
            }
            ContentState::Ready(resolved) => {
                let view = &resolved.view;
                let block = self.frame_block(view.title());
                let inner = block.inner(area);
                frame.render_widget(block, area);

                let [body_area, hint_area] =
                    Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

                let lines: Vec<Line> = view
                    .body()
                    .into_iter()
                    .map(|line| Line::from(Span::styled(line.text, tone_style(line.tone))))
                    .collect();
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);

                let hints = view.hints();
                if !hints.is_empty() {
                    frame.render_widget(
                        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
                        hint_area,
                    );
                }
            }
        }
    }
}
