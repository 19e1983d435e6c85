//! Highlight palette used to color selected countries.
//!
//! The palette is a fixed list of ten CSS named colors. Colors are handed out
//! in order by a [`PaletteCursor`] so consecutive selections never repeat
//! until the palette wraps.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten highlight colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightColor {
    /// CSS `Yellow`
    Yellow,
    /// CSS `SteelBlue`
    SteelBlue,
    /// CSS `SpringGreen`
    SpringGreen,
    /// CSS `Tomato`
    Tomato,
    /// CSS `Violet`
    Violet,
    /// CSS `Orange`
    Orange,
    /// CSS `Lime`
    Lime,
    /// CSS `FireBrick`
    FireBrick,
    /// CSS `Chartreuse`
    Chartreuse,
    /// CSS `CornflowerBlue`
    CornflowerBlue,
}

/// Palette in assignment order.
pub const PALETTE: [HighlightColor; 10] = [
    HighlightColor::Yellow,
    HighlightColor::SteelBlue,
    HighlightColor::SpringGreen,
    HighlightColor::Tomato,
    HighlightColor::Violet,
    HighlightColor::Orange,
    HighlightColor::Lime,
    HighlightColor::FireBrick,
    HighlightColor::Chartreuse,
    HighlightColor::CornflowerBlue,
];

impl HighlightColor {
    /// CSS color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yellow => "Yellow",
            Self::SteelBlue => "SteelBlue",
            Self::SpringGreen => "SpringGreen",
            Self::Tomato => "Tomato",
            Self::Violet => "Violet",
            Self::Orange => "Orange",
            Self::Lime => "Lime",
            Self::FireBrick => "FireBrick",
            Self::Chartreuse => "Chartreuse",
            Self::CornflowerBlue => "CornflowerBlue",
        }
    }

    /// RGB channels matching the CSS definition.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Yellow => (255, 255, 0),
            Self::SteelBlue => (70, 130, 180),
            Self::SpringGreen => (0, 255, 127),
            Self::Tomato => (255, 99, 71),
            Self::Violet => (238, 130, 238),
            Self::Orange => (255, 165, 0),
            Self::Lime => (0, 255, 0),
            Self::FireBrick => (178, 34, 34),
            Self::Chartreuse => (127, 255, 0),
            Self::CornflowerBlue => (100, 149, 237),
        }
    }

    /// Hex string in the format "#RRGGBB".
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Whether dark text reads better than light text on this background.
    ///
    /// Uses the relative luminance approximation (0.299 R + 0.587 G + 0.114 B).
    #[must_use]
    pub fn prefers_dark_text(self) -> bool {
        let (r, g, b) = self.rgb();
        let luminance = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
        luminance > 128_000
    }

    /// Uniformly random palette entry.
    #[must_use]
    pub fn random() -> Self {
        let index = rand::thread_rng().gen_range(0..PALETTE.len());
        PALETTE[index]
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(self) -> ratatui::style::Color {
        let (r, g, b) = self.rgb();
        ratatui::style::Color::Rgb(r, g, b)
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotating index into [`PALETTE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteCursor {
    index: usize,
}

impl PaletteCursor {
    /// Creates a cursor positioned at the first palette color.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Returns the color under the cursor and advances it, wrapping at the end.
    pub fn next_color(&mut self) -> HighlightColor {
        let color = PALETTE[self.index];
        self.index = (self.index + 1) % PALETTE.len();
        color
    }
}
