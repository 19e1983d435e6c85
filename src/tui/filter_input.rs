//! Free-text filter field.
//!
//! Holds only the current text and an edit cursor. On Enter it splits the text
//! into search and group tokens and emits them unchanged.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::component::{Component, FilterEvent};
use super::Theme;
use crate::constants::FILTER_PLACEHOLDER;
use crate::query::split_filter_text;

/// Filter input state.
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    text: String,
    /// Cursor position in characters
    cursor: usize,
}

impl FilterInput {
    /// Creates an empty filter input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Splits the current text into `(search, group)` tokens.
    #[must_use]
    pub fn tokens(&self) -> (String, String) {
        split_filter_text(&self.text)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }
}

impl Component for FilterInput {
    type Event = FilterEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<FilterEvent> {
        match key.code {
            KeyCode::Enter => {
                let (search, group) = self.tokens();
                Some(FilterEvent::Search { search, group })
            }
            KeyCode::Esc => {
                self.clear();
                Some(FilterEvent::Cleared)
            }
            KeyCode::Tab | KeyCode::Down => Some(FilterEvent::FocusNext),
            KeyCode::Backspace => {
                self.backspace();
                None
            }
            KeyCode::Delete => {
                self.delete();
                None
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
                None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_color = if focused { theme.primary } else { theme.surface };

        let line = if self.text.is_empty() && !focused {
            Line::from(Span::styled(
                format!(" {FILTER_PLACEHOLDER}"),
                Style::default().fg(theme.text_muted),
            ))
        } else {
            let at = self.byte_index(self.cursor);
            let (before, after) = self.text.split_at(at);
            let mut spans = vec![
                Span::styled(" Filter: ", Style::default().fg(theme.text_muted)),
                Span::styled(
                    before.to_string(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ];
            if focused {
                spans.push(Span::styled(
                    "█",
                    Style::default().fg(theme.primary).add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            spans.push(Span::styled(
                after.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ));
            Line::from(spans)
        };

        let input = Paragraph::new(line).block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(input, area);
    }
}
