use ratatui::style::Color;

/// Colors used by the widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2), used for selections.
    pub surface2: Color,
    /// Muted overlay line/border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for the focused pane border and titles.
    pub mauve: Color,
    /// Color for warnings in the status line.
    pub yellow: Color,
}

impl Theme {
    /// Dark palette (Catppuccin Mocha tones).
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
        }
    }

    /// Light palette (Catppuccin Latte tones).
    #[must_use]
    pub const fn light() -> Self {
        Self {
            base: Color::Rgb(0xef, 0xf1, 0xf5),
            surface1: Color::Rgb(0xbc, 0xc0, 0xcc),
            surface2: Color::Rgb(0xac, 0xb0, 0xbe),
            overlay1: Color::Rgb(0x8c, 0x8f, 0xa1),
            text: Color::Rgb(0x4c, 0x4f, 0x69),
            subtext0: Color::Rgb(0x6c, 0x6f, 0x85),
            mauve: Color::Rgb(0x88, 0x39, 0xef),
            yellow: Color::Rgb(0xdf, 0x8e, 0x1d),
        }
    }

    /// Palette matching the dark mode flag.
    #[must_use]
    pub const fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }
}
