//! Theme tokens derived from a [`quickui_core::Style`].
//!
//! Widgets never read the style directly for colours; they ask the theme
//! for ready-made ratatui styles so every panel stays consistent.
//!
//! # Roles
//! - **Accent**: focus, slider track, first series
//! - **Text**: label content and slider values
//! - **Muted**: tick labels, hints, unfocused borders
//! - **Error**: failed refreshes and the error history

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;

use quickui_core::style::{Marker, Rgb};

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    /// Series colours, resolved through [`quickui_core::Style::series_color`].
    pub palette: Vec<Color>,
    pub bold: bool,
    pub marker: Marker,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_style(&quickui_core::Style::default())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Theme {
    pub fn from_style(style: &quickui_core::Style) -> Self {
        Self {
            accent: color(style.accent),
            text: color(style.text),
            muted: color(style.muted),
            error: color(style.error),
            palette: (0..style.palette.len().max(1))
                .map(|i| color(style.series_color(i)))
                .collect(),
            bold: style.bold,
            marker: style.marker,
        }
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    /// Widget text, bold when the style asks for it.
    pub fn text(&self) -> Style {
        let style = Style::default().fg(self.text);
        if self.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Border of a focusable widget.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.accent_bold()
        } else {
            self.muted()
        }
    }

    /// Colour of the `index`-th plotted series.
    pub fn series(&self, index: usize) -> Color {
        let len = self.palette.len().max(1);
        self.palette.get(index % len).copied().unwrap_or(self.accent)
    }

    pub fn chart_marker(&self) -> symbols::Marker {
        match self.marker {
            Marker::Braille => symbols::Marker::Braille,
            Marker::Dot => symbols::Marker::Dot,
            Marker::Block => symbols::Marker::Block,
            Marker::HalfBlock => symbols::Marker::HalfBlock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
        assert_eq!(theme.palette.len(), 5);
    }

    #[test]
    fn test_text_bold_follows_style() {
        let plain = Theme::from_style(&quickui_core::Style {
            bold: false,
            ..quickui_core::Style::default()
        });
        assert!(!plain.text().add_modifier.contains(Modifier::BOLD));
        assert!(Theme::default().text().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_series_color_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.series(0), theme.series(5));
        assert_ne!(theme.series(0), theme.series(1));
    }

    #[test]
    fn test_empty_palette_uses_accent() {
        let theme = Theme::from_style(&quickui_core::Style {
            palette: Vec::new(),
            ..quickui_core::Style::default()
        });
        assert_eq!(theme.palette.len(), 1);
        assert_eq!(theme.series(3), theme.accent);
    }

    #[test]
    fn test_marker_mapping() {
        let theme = Theme::from_style(&quickui_core::Style {
            marker: Marker::Dot,
            ..quickui_core::Style::default()
        });
        assert_eq!(theme.chart_marker(), symbols::Marker::Dot);
    }

    #[test]
    fn test_border_focus() {
        let theme = Theme::default();
        assert_eq!(theme.border(false), theme.muted());
        assert_eq!(theme.border(true), theme.accent_bold());
    }
}
