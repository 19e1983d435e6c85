//! Theme system for consistent UI colors across dark and light modes.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles, and emphasis
    pub primary: Color,
    /// Cursor, key hints, and focus states
    pub accent: Color,
    /// Success messages
    pub success: Color,
    /// Errors
    pub error: Color,
    /// Warnings and advisories
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text for help, placeholders, and labels
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Surface color for inactive borders
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme via `dark-light` and returns the matching Theme.
    #[must_use]
    pub fn detect() -> Self {
        // Only an explicit light OS mode selects the light theme
        if matches!(dark_light::detect(), Ok(dark_light::Mode::Light)) {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Resolves a configured theme mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(60, 60, 60),
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(200, 200, 200),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
