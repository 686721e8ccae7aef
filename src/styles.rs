//! Theme and style system for dialogdemo
//!
//! Provides consistent styling across the screen and its dialogs with support
//! for light, dark and colorless terminals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: Color::Cyan,
    secondary: Color::Magenta,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Yellow,
    border: Color::DarkGray,
    border_focused: Color::Cyan,
    highlight_bg: Color::DarkGray,
    background: Color::Reset,
    dialog_border_type: BorderType::Rounded,
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    NoColor,
}

impl ThemeType {
    /// Name used in the config file and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
            ThemeType::NoColor => "nocolor",
        }
    }
}

impl FromStr for ThemeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(ThemeType::Dark),
            "light" => Ok(ThemeType::Light),
            "nocolor" | "no-color" | "no_color" => Ok(ThemeType::NoColor),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,

    // === Accents ===
    /// Main accent color (borders, titles, focused buttons)
    pub primary: Color,
    /// Secondary accent (icons, pictures)
    pub secondary: Color,

    // === Semantic Colors ===
    /// Status line of the auth dialog
    pub error: Color,

    // === Text Colors ===
    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    // === UI Colors ===
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,
    /// Border type shared by every dialog frame
    pub dialog_border_type: BorderType,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            secondary: Color::Magenta,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            background: Color::Reset,
            dialog_border_type: BorderType::Rounded,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            secondary: Color::Magenta,
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            background: Color::Reset,
            dialog_border_type: BorderType::Rounded,
        }
    }

    /// No-color theme
    ///
    /// Style helpers below avoid setting fg/bg in this mode so the terminal
    /// defaults are used without emitting color codes.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            background: Color::Reset,
            dialog_border_type: BorderType::Plain,
        }
    }

    fn is_no_color(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for emphasized text (key hints)
    pub fn emphasis_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    /// Style for icons and pictures drawn inside dialogs
    pub fn accent_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.secondary)
    }

    /// Style for the auth status line
    pub fn error_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::ITALIC);
        }
        Style::default().fg(self.error)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Style for a focused button or selected trigger
    pub fn highlight_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the page behind an open dialog
    pub fn dim_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted).add_modifier(Modifier::DIM)
    }

    /// Background style
    pub fn background_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}
