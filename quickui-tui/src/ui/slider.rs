//! Labeled horizontal slider: name and value, track, end ticks.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use quickui_core::{SliderControl, Value};

use crate::theme::Theme;

/// Rows a slider occupies.
pub const HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, control: &SliderControl, theme: &Theme, focused: bool) {
    if area.height == 0 || area.width < 3 {
        return;
    }
    let name_style = if focused {
        theme.accent_bold().add_modifier(Modifier::REVERSED)
    } else {
        theme.accent()
    };
    let marker = if focused { "▶ " } else { "  " };

    let spec = control.spec();
    let lines = vec![
        Line::from(vec![
            Span::styled(marker, theme.accent()),
            Span::styled(control.name().to_string(), name_style),
            Span::styled(": ", theme.muted()),
            Span::styled(control.value().to_string(), theme.text()),
        ]),
        Line::from(Span::styled(
            render_track(control.fraction(), area.width as usize),
            if focused { theme.accent() } else { theme.muted() },
        )),
        tick_line(
            &spec.value_of(spec.start),
            &spec.value_of(spec.end),
            area.width as usize,
            theme,
        ),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}

/// Screen cells of the track interior (between the brackets).
pub fn track_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    }
}

/// Fraction of the track under screen column `column`.
pub fn column_fraction(track: Rect, column: u16) -> f64 {
    if track.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(track.x).min(track.width - 1);
    f64::from(offset) / f64::from(track.width - 1)
}

fn render_track(fraction: f64, width: usize) -> String {
    let inner = width.saturating_sub(2);
    if inner == 0 {
        return "[]".to_string();
    }
    let thumb = (fraction.clamp(0.0, 1.0) * (inner - 1) as f64).round() as usize;
    let filled = "=".repeat(thumb);
    let empty = " ".repeat(inner - thumb - 1);
    format!("[{filled}█{empty}]")
}

/// Tick labels at both ends: the tick interval spans the whole range.
fn tick_line(start: &Value, end: &Value, width: usize, theme: &Theme) -> Line<'static> {
    let left = start.to_string();
    let right = end.to_string();
    let gap = width.saturating_sub(left.chars().count() + right.chars().count());
    Line::from(vec![
        Span::styled(left, theme.muted()),
        Span::raw(" ".repeat(gap)),
        Span::styled(right, theme.muted()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_places_thumb_by_fraction() {
        assert_eq!(render_track(0.0, 7), "[█    ]");
        assert_eq!(render_track(1.0, 7), "[====█]");
        assert_eq!(render_track(0.5, 7), "[==█  ]");
        assert_eq!(render_track(0.5, 2), "[]");
    }

    #[test]
    fn column_maps_to_fraction() {
        let track = track_area(Rect::new(10, 0, 12, 3));
        assert_eq!(track, Rect::new(11, 1, 10, 1));
        assert_eq!(column_fraction(track, 11), 0.0);
        assert_eq!(column_fraction(track, 20), 1.0);
        assert_eq!(column_fraction(track, 0), 0.0);
        assert_eq!(column_fraction(track, 99), 1.0);
    }
}
