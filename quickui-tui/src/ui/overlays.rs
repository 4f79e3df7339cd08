//! Overlay widgets — key help and error history.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::ui::centered_rect;

const HELP: [(&str, &str); 11] = [
    ("q / Esc", "quit"),
    ("Tab / Shift-Tab", "next / previous widget"),
    ("h l / ← →", "slider: one step"),
    ("H L / PgDn PgUp", "slider: ten steps"),
    ("Home / End", "slider: jump to start / end"),
    ("j k / ↓ ↑", "slider: move focus"),
    ("click, drag", "slider: set from mouse"),
    ("+ / -", "plot: zoom in / out"),
    ("h j k l / arrows", "plot: pan"),
    ("Home / r", "plot: autoscale"),
    ("b / f", "plot: view back / forward"),
];

/// Key reference overlay.
pub fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(" Keys [any key]close ")
        .title_style(theme.accent_bold());

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (keys, action) in HELP {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:>18}  "), theme.accent()),
            Span::styled(action, theme.muted()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  e: error history   ?: this help",
        theme.muted(),
    )));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.error())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme.error());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme.muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let err = &app.error_history[i];
        let style = if i == app.error_scroll {
            theme.error().add_modifier(Modifier::BOLD)
        } else {
            theme.muted()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", err.timestamp.format("%H:%M:%S")), theme.muted()),
            Span::styled(format!("[{}] ", err.category.label()), theme.accent()),
            Span::styled(err.message.as_str(), style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(err.context.as_str(), theme.muted()),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}
