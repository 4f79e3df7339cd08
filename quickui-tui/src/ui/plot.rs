//! Plot canvas: a bordered line chart with a one-row toolbar beneath it.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use quickui_core::{Bounds, Plot};

use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, plot: &Plot, theme: &Theme, focused: bool) {
    let [chart_area, toolbar_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused));

    let Some(canvas) = plot.canvas() else {
        f.render_widget(block, chart_area);
        return;
    };
    let subplot = canvas.subplot();

    if subplot.series().iter().all(|s| s.is_empty()) {
        let inner = block.inner(chart_area);
        f.render_widget(block, chart_area);
        render_empty(f, inner, theme);
    } else {
        let points: Vec<Vec<(f64, f64)>> = subplot.series().iter().map(|s| s.points()).collect();
        render_chart(f, chart_area, block, &points, subplot.view(), theme);
    }

    render_toolbar(f, toolbar_area, subplot.is_autoscaled(), theme, focused);
}

fn render_empty(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Nothing plotted.", theme.muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_chart(
    f: &mut Frame,
    area: Rect,
    block: Block,
    points: &[Vec<(f64, f64)>],
    view: Bounds,
    theme: &Theme,
) {
    let datasets: Vec<Dataset> = points
        .iter()
        .enumerate()
        .map(|(i, data)| {
            Dataset::default()
                .marker(theme.chart_marker())
                .style(Style::default().fg(theme.series(i)))
                .graph_type(GraphType::Line)
                .data(data)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(theme.muted())
                .bounds(view.x)
                .labels(axis_labels(view.x, theme)),
        )
        .y_axis(
            Axis::default()
                .style(theme.muted())
                .bounds(view.y)
                .labels(axis_labels(view.y, theme)),
        );

    f.render_widget(chart, area);
}

fn axis_labels([lo, hi]: [f64; 2], theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(format_tick(lo), theme.muted()),
        Span::styled(format_tick((lo + hi) / 2.0), theme.muted()),
        Span::styled(format_tick(hi), theme.muted()),
    ]
}

/// Compact tick text: whole numbers without decimals, others with two.
pub fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

fn render_toolbar(f: &mut Frame, area: Rect, autoscaled: bool, theme: &Theme, focused: bool) {
    let hint_style = if focused { theme.accent() } else { theme.muted() };
    let view = if autoscaled { "autoscale" } else { "custom" };
    let line = Line::from(vec![
        Span::styled(" [Home]home [+/-]zoom [hjkl]pan [b/f]back/fwd", hint_style),
        Span::raw(" | "),
        Span::styled(format!("view: {view}"), theme.muted()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
