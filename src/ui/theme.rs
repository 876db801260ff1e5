//! # Theme System
//!
//! Centralized colors for the portfolio TUI. Rendering code references
//! semantic [`Theme`] fields instead of hardcoding `ratatui::style::Color`
//! values; the active theme is chosen via config or `--theme` and can be
//! cycled at runtime with the `t` key.

use ratatui::style::Color;

/// All colors used by the portfolio TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, matched case-insensitively by `--theme`.
    pub name: &'static str,

    /// Main background color for panels.
    pub bg: Color,
    /// Primary text color.
    pub fg: Color,
    /// Muted text (hints, footer, the system-prompt line).
    pub fg_dim: Color,
    /// Primary accent: hero name, focused borders, selected nav button.
    pub accent: Color,
    /// Secondary accent: section labels, the active tool name.
    pub secondary: Color,
    /// Terminal log lines and the typing indicator dot.
    pub success: Color,
    /// Error/warning indicator.
    pub error: Color,
    /// `<tag>` spans inside the streamed content body.
    pub tag: Color,
}

impl Theme {
    /// All built-in themes (order = cycle order for the `t` key).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// The default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one in cycle order, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let pos = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(pos + 1) % BUILT_IN_THEMES.len()]
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
        tag: Color::Rgb(116, 199, 236),       // sapphire
    },
    // 1 - Catppuccin Macchiato
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),           // base
        fg: Color::Rgb(202, 211, 245),        // text
        fg_dim: Color::Rgb(110, 115, 141),    // overlay0
        accent: Color::Rgb(138, 173, 244),    // blue
        secondary: Color::Rgb(238, 212, 159), // yellow
        success: Color::Rgb(166, 218, 149),   // green
        error: Color::Rgb(237, 135, 150),     // red
        tag: Color::Rgb(125, 196, 228),       // sapphire
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        tag: Color::Rgb(189, 147, 249), // purple
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        tag: Color::Rgb(129, 161, 193), // frost3
    },
    // 4 - Tokyo Night
    Theme {
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(122, 162, 247),    // blue
        secondary: Color::Rgb(224, 175, 104), // yellow
        success: Color::Rgb(115, 218, 202),
        error: Color::Rgb(247, 118, 142),
        tag: Color::Rgb(187, 154, 247), // purple
    },
];
