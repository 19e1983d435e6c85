//! Card grid showing the current page of countries.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::pipeline::{CountryPipeline, CountryView};

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Card height: five property lines plus borders.
const CARD_HEIGHT: u16 = 7;

/// Moves a card cursor within a page of `len` items.
///
/// `dx` moves along a row, `dy` across rows. Movement stops at the edges.
#[must_use]
pub fn move_cursor(cursor: usize, len: usize, dx: isize, dy: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let delta = dx + dy * GRID_COLUMNS as isize;
    let target = cursor as isize + delta;
    if target < 0 || target >= len as isize {
        cursor.min(len - 1)
    } else {
        target as usize
    }
}

/// First grid row to draw so the cursor row stays visible.
#[must_use]
pub fn first_visible_row(cursor: usize, visible_rows: usize) -> usize {
    let cursor_row = cursor / GRID_COLUMNS;
    cursor_row.saturating_sub(visible_rows.saturating_sub(1))
}

/// Renders the current page as a grid of cards.
pub fn render(f: &mut Frame, area: Rect, pipeline: &CountryPipeline, cursor: Option<usize>, theme: &Theme) {
    let items = pipeline.current_page_items();

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No countries to show",
            Style::default().fg(theme.text_muted),
        )))
        .block(Block::default().style(Style::default().bg(theme.background)));
        f.render_widget(empty, area);
        return;
    }

    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let first_row = first_visible_row(cursor.unwrap_or(0), visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let row = first_row + row_offset;
        let start = row * GRID_COLUMNS;
        if start >= items.len() {
            break;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, card_area) in columns.iter().enumerate() {
            let position = start + col;
            if let Some(item) = items.get(position) {
                render_card(f, *card_area, pipeline, item, position, cursor == Some(position), theme);
            }
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    pipeline: &CountryPipeline,
    item: &CountryView,
    position: usize,
    has_cursor: bool,
    theme: &Theme,
) {
    let country = item.country();
    let background = pipeline.background_for(item, position);

    let (bg, fg) = match background {
        Some(color) => {
            let fg = if color.prefers_dark_text() {
                Color::Black
            } else {
                Color::White
            };
            (color.to_ratatui_color(), fg)
        }
        None => (theme.background, theme.text),
    };

    let label = Style::default().fg(fg).add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    let value = Style::default().fg(fg);
    let property = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(name, label),
            Span::styled(format!(" {text}"), value),
        ])
    };

    let lines = vec![
        property("Country Code:", country.code.clone()),
        property("Continent:", country.continent.name.clone()),
        property("Capital:", country.capital_display().to_string()),
        property("Currency:", country.currency_display().to_string()),
        property("Language:", country.languages_display()),
    ];

    let border_type = if item.is_selected {
        BorderType::Double
    } else if has_cursor {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    let border_color = if has_cursor { theme.accent } else { fg };

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", country.name.to_uppercase()),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(bg)),
    );
    f.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_within_row() {
        assert_eq!(move_cursor(0, 15, 1, 0), 1);
        assert_eq!(move_cursor(1, 15, -1, 0), 0);
        assert_eq!(move_cursor(0, 15, -1, 0), 0);
    }

    #[test]
    fn test_move_cursor_across_rows() {
        assert_eq!(move_cursor(1, 15, 0, 1), 4);
        assert_eq!(move_cursor(4, 15, 0, -1), 1);
        // Last row is partial: moving down past the end stays put
        assert_eq!(move_cursor(9, 11, 0, 1), 9);
        assert_eq!(move_cursor(13, 15, 0, 1), 13);
    }

    #[test]
    fn test_move_cursor_clamps_stale_position() {
        assert_eq!(move_cursor(12, 4, 0, 1), 3);
        assert_eq!(move_cursor(3, 0, 1, 0), 0);
    }

    #[test]
    fn test_first_visible_row() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(8, 3), 0);
        assert_eq!(first_visible_row(9, 3), 1);
        assert_eq!(first_visible_row(14, 2), 3);
        assert_eq!(first_visible_row(14, 0), 4);
    }
}
