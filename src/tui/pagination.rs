//! Page number bar under the card grid.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Theme;
use crate::pipeline::CountryPipeline;

/// Renders `1..=total_pages` as buttons, the current page inverted.
pub fn render(f: &mut Frame, area: Rect, pipeline: &CountryPipeline, theme: &Theme) {
    let current = pipeline.current_page();

    let mut spans: Vec<Span<'static>> = Vec::new();
    for page in pipeline.page_numbers() {
        if page > 1 {
            spans.push(Span::raw(" "));
        }
        let style = if page == current {
            Style::default()
                .fg(theme.background)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(format!(" {page} "), style));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background));
    f.render_widget(bar, area);
}
