use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use quickui_core::Label;

use crate::theme::Theme;

/// Rows a label occupies.
pub const HEIGHT: u16 = 1;

pub fn render(f: &mut Frame, area: Rect, label: &Label, theme: &Theme) {
    let para = Paragraph::new(label.text().to_string())
        .style(theme.text())
        .alignment(Alignment::Center);
    f.render_widget(para, area);
}
