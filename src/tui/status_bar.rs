//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, LoadState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if state.status_message.is_empty() {
            Self::summary_line(state, theme)
        } else if let Some(color) = state.status_color_override {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(color),
            ))
        } else {
            Line::from(state.status_message.as_str())
        };

        let status = Paragraph::new(vec![first_line, Self::help_line(state.focus, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Source and count summary shown when no message is pending
    fn summary_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let muted = Style::default().fg(theme.text_muted);
        match &state.load_state {
            LoadState::Loading => Line::from(Span::styled(
                format!("Loading from {}", state.source_description),
                muted,
            )),
            LoadState::Failed(_) => Line::from(Span::styled(
                format!("Load from {} failed", state.source_description),
                Style::default().fg(theme.error),
            )),
            LoadState::Ready(pipeline) => {
                let selected = pipeline.view().iter().filter(|item| item.is_selected).count();
                Line::from(vec![
                    Span::styled("Showing ", muted),
                    Span::styled(
                        pipeline.view().len().to_string(),
                        Style::default().fg(theme.primary),
                    ),
                    Span::styled(format!(" of {} countries, ", pipeline.base_len()), muted),
                    Span::styled(selected.to_string(), Style::default().fg(theme.primary)),
                    Span::styled(" selected", muted),
                ])
            }
        }
    }

    /// Key hints for the focused area
    fn help_line(focus: Focus, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match focus {
            Focus::Filter => &[
                ("Enter", "Search"),
                ("Esc", "Clear"),
                ("Tab", "Cards"),
                ("Ctrl+C", "Quit"),
            ],
            Focus::Grid => &[
                ("Arrows", "Move"),
                ("Space", "Select"),
                ("[ ]", "Page"),
                ("/", "Filter"),
                ("c", "Clear"),
                ("q", "Quit"),
            ],
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }

        Line::from(spans)
    }
}
