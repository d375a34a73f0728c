use ratatui::style::{Color, Modifier, Style};

use crate::api::CharacterStatus;

/// Application theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary colors
    pub primary: Color,
    pub accent: Color,

    /// Text colors
    pub text: Color,
    pub text_dim: Color,

    /// Border colors
    pub border: Color,
    pub border_focused: Color,

    /// Status colors
    pub alive: Color,
    pub dead: Color,
    pub unknown: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(147, 51, 234),    // Purple
            accent: Color::Rgb(134, 239, 172),    // Portal green

            text: Color::Rgb(248, 250, 252),      // Slate-50
            text_dim: Color::Rgb(148, 163, 184),  // Slate-400

            border: Color::Rgb(71, 85, 105),      // Slate-600
            border_focused: Color::Rgb(147, 51, 234),

            alive: Color::Rgb(34, 197, 94),       // Green-500
            dead: Color::Rgb(239, 68, 68),        // Red-500
            unknown: Color::Rgb(245, 158, 11),    // Amber-500
            error: Color::Rgb(239, 68, 68),       // Red-500
        }
    }

    /// Color for a character's life status
    pub fn status_color(&self, status: &CharacterStatus) -> Color {
        match status {
            CharacterStatus::Alive => self.alive,
            CharacterStatus::Dead => self.dead,
            CharacterStatus::Other(_) => self.unknown,
        }
    }

    /// Style for an active pagination control
    pub fn control_active(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Style for a disabled pagination control
    pub fn control_disabled(&self) -> Style {
        Style::default().fg(self.text_dim).add_modifier(Modifier::DIM)
    }
}
