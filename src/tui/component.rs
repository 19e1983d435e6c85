//! Component trait pattern for TUI components.
//!
//! Components are self-contained UI elements that manage their own state,
//! handle keyboard input, and emit events for the parent to act on.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool);
}

/// Events emitted by the filter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// User submitted the filter text, already split into raw tokens
    Search {
        /// Search token (may be empty)
        search: String,
        /// Group token (may be empty)
        group: String,
    },
    /// User cleared the filter
    Cleared,
    /// User asked to move focus to the country grid
    FocusNext,
}
