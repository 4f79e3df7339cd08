//! Top-level UI layout — one window of stacked widgets plus a status bar.
//!
//! Sliders come first (three rows each), then outputs in attachment order.
//! Labels take one row; plots share whatever height is left.

pub mod label;
pub mod overlays;
pub mod plot;
pub mod slider;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use quickui_core::Output;

use crate::app::{AppState, Focus, Overlay};

/// Screen areas of every widget, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    pub window: Rect,
    pub controls: Vec<Rect>,
    pub outputs: Vec<Rect>,
    pub status: Rect,
    pub too_narrow: bool,
}

/// Compute where everything goes inside `area`.
pub fn layout(area: Rect, app: &AppState) -> Regions {
    let [window, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    let too_narrow = area.width < app.style.min_width;

    let inner = Block::default().borders(Borders::ALL).inner(window);
    let control_count = app.session.controls().len();

    let mut constraints: Vec<Constraint> = vec![Constraint::Length(slider::HEIGHT); control_count];
    let mut has_plot = false;
    for output in app.session.outputs() {
        match output {
            Output::Label(_) => constraints.push(Constraint::Length(label::HEIGHT)),
            Output::Plot(_) => {
                has_plot = true;
                constraints.push(Constraint::Fill(1));
            }
        }
    }
    if !has_plot {
        constraints.push(Constraint::Fill(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let output_count = app.session.outputs().len();
    Regions {
        window,
        controls: chunks[..control_count].to_vec(),
        outputs: chunks[control_count..control_count + output_count].to_vec(),
        status,
        too_narrow,
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let regions = layout(f.area(), app);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.muted())
        .title(format!(" {} ", app.style.title))
        .title_style(app.theme.accent_bold());

    if regions.too_narrow {
        let inner = block.inner(regions.window);
        f.render_widget(block, regions.window);
        render_too_narrow(f, inner, app);
        status_bar::render(f, regions.status, app);
        return;
    }
    f.render_widget(block, regions.window);

    for (i, (control, area)) in app.session.controls().iter().zip(&regions.controls).enumerate() {
        if let Some(s) = control.as_slider() {
            slider::render(f, *area, s, &app.theme, app.is_focused(Focus::Control(i)));
        }
    }

    for (i, (output, area)) in app.session.outputs().iter().zip(&regions.outputs).enumerate() {
        match output {
            Output::Label(l) => label::render(f, *area, l, &app.theme),
            Output::Plot(p) => {
                plot::render(f, *area, p, &app.theme, app.is_focused(Focus::Plot(i)))
            }
        }
    }

    status_bar::render(f, regions.status, app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, regions.window, app),
        Overlay::ErrorHistory => overlays::render_error_history(f, regions.window, app),
        Overlay::None => {}
    }
}

fn render_too_narrow(f: &mut Frame, area: Rect, app: &AppState) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Window too narrow: {} columns, need at least {}.",
                area.width + 2,
                app.style.min_width
            ),
            app.theme.muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
