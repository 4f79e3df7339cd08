//! Input dispatch — overlays → global keys → focused widget; mouse → sliders.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{AppState, Focus, Overlay};
use crate::ui;

/// Keyboard steps for page moves on a slider.
const PAGE_STEPS: i64 = 10;
/// Zoom factor per key press; zooming out uses the reciprocal.
const ZOOM_IN: f64 = 0.8;
/// Fraction of the view shifted per pan key press.
const PAN_FRACTION: f64 = 0.1;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev();
            } else {
                app.focus_next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        _ => {}
    }

    // 3. Focused widget.
    match app.current_focus() {
        Some(Focus::Control(index)) => handle_slider_key(app, index, key),
        Some(Focus::Plot(index)) => handle_plot_key(app, index, key),
        None => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_slider_key(app: &mut AppState, index: usize, key: KeyEvent) {
    let result = match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.session.nudge(index, -1),
        KeyCode::Char('l') | KeyCode::Right => app.session.nudge(index, 1),
        KeyCode::Char('H') | KeyCode::PageDown => app.session.nudge(index, -PAGE_STEPS),
        KeyCode::Char('L') | KeyCode::PageUp => app.session.nudge(index, PAGE_STEPS),
        KeyCode::Home => app.session.set_fraction(index, 0.0),
        KeyCode::End => app.session.set_fraction(index, 1.0),
        KeyCode::Char('j') | KeyCode::Down => {
            app.focus_next();
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.focus_prev();
            return;
        }
        _ => return,
    };
    app.record_change(index, result);
}

fn handle_plot_key(app: &mut AppState, index: usize, key: KeyEvent) {
    let Some(canvas) = app.session.canvas_mut(index) else {
        return;
    };
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') => canvas.zoom(ZOOM_IN),
        KeyCode::Char('-') => canvas.zoom(1.0 / ZOOM_IN),
        KeyCode::Char('h') | KeyCode::Left => canvas.pan(-PAN_FRACTION, 0.0),
        KeyCode::Char('l') | KeyCode::Right => canvas.pan(PAN_FRACTION, 0.0),
        KeyCode::Char('k') | KeyCode::Up => canvas.pan(0.0, PAN_FRACTION),
        KeyCode::Char('j') | KeyCode::Down => canvas.pan(0.0, -PAN_FRACTION),
        KeyCode::Home | KeyCode::Char('r') => canvas.home(),
        KeyCode::Char('b') => {
            if !canvas.back() {
                app.set_warning("Already at the oldest view");
            }
        }
        KeyCode::Char('f') => {
            if !canvas.forward() {
                app.set_warning("Already at the newest view");
            }
        }
        _ => {}
    }
}

/// Mouse clicks and drags on slider tracks. `area` is the full terminal.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, area: Rect) {
    if app.overlay != Overlay::None {
        return;
    }
    let regions = ui::layout(area, app);
    if regions.too_narrow {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = regions.controls.iter().position(|r| {
                let track = ui::slider::track_area(*r);
                mouse.row == track.y && mouse.column >= r.x && mouse.column < r.x + r.width
            });
            app.dragging = hit;
            if let Some(index) = hit {
                app.focus_on(Focus::Control(index));
                set_from_column(app, index, regions.controls[index], mouse.column);
            } else if let Some(index) = regions
                .outputs
                .iter()
                .position(|r| r.contains((mouse.column, mouse.row).into()))
            {
                app.focus_on(Focus::Plot(index));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(index) = app.dragging {
                if let Some(area) = regions.controls.get(index).copied() {
                    set_from_column(app, index, area, mouse.column);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app.dragging = None,
        _ => {}
    }
}

/// Move slider `index` to the track position under `column`.
fn set_from_column(app: &mut AppState, index: usize, area: Rect, column: u16) {
    let fraction = ui::slider::column_fraction(ui::slider::track_area(area), column);
    let result = app.session.set_fraction(index, fraction);
    app.record_change(index, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use quickui_core::{forall, Label, Output, Plot, Slider, Style, Value};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> AppState {
        let session = forall([("x", Slider::new(0, 20))])
            .attach([
                Output::from(Label::new(|kw| kw.i64("x"))),
                Plot::new(|kw| Ok(vec![kw.f64("x")?, 0.0])).into(),
            ])
            .into_session();
        AppState::new(session, Style::default())
    }

    #[test]
    fn slider_keys_step_page_and_jump() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.session.get("x"), Some(&Value::Int(1)));
        handle_key(&mut app, key(KeyCode::Char('L')));
        assert_eq!(app.session.get("x"), Some(&Value::Int(11)));
        handle_key(&mut app, key(KeyCode::End));
        assert_eq!(app.session.get("x"), Some(&Value::Int(20)));
        handle_key(&mut app, key(KeyCode::Char('h')));
        assert_eq!(app.session.get("x"), Some(&Value::Int(19)));
        handle_key(&mut app, key(KeyCode::Home));
        assert_eq!(app.session.get("x"), Some(&Value::Int(0)));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Right);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        handle_key(&mut app, release);
        assert_eq!(app.session.get("x"), Some(&Value::Int(0)));
    }

    #[test]
    fn plot_keys_drive_the_toolbar() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.current_focus(), Some(Focus::Plot(1)));

        handle_key(&mut app, key(KeyCode::Char('+')));
        assert!(!app.session.canvas_mut(1).unwrap().subplot().is_autoscaled());

        handle_key(&mut app, key(KeyCode::Char('r')));
        assert!(app.session.canvas_mut(1).unwrap().subplot().is_autoscaled());

        handle_key(&mut app, key(KeyCode::Char('f')));
        assert!(matches!(app.status_message, Some((_, crate::app::StatusLevel::Warning))));
    }

    #[test]
    fn overlays_capture_keys() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);

        handle_key(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.overlay, Overlay::ErrorHistory);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);

        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn click_on_track_sets_value() {
        let mut app = app();
        let area = Rect::new(0, 0, 100, 30);
        let regions = ui::layout(area, &app);
        let track = ui::slider::track_area(regions.controls[0]);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: track.x + track.width - 1,
            row: track.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, click, area);
        assert_eq!(app.session.get("x"), Some(&Value::Int(20)));

        let drag = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: track.x,
            row: track.y + 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, drag, area);
        assert_eq!(app.session.get("x"), Some(&Value::Int(0)));
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn drag_only_moves_the_pressed_slider() {
        let mut app = app();
        let area = Rect::new(0, 0, 100, 30);
        let regions = ui::layout(area, &app);
        let label = regions.outputs[0];
        assert_eq!(app.current_focus(), Some(Focus::Control(0)));

        let press = mouse(MouseEventKind::Down(MouseButton::Left), label.x + 2, label.y);
        handle_mouse(&mut app, press, area);
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), label.x + 95, label.y);
        handle_mouse(&mut app, drag, area);
        assert_eq!(app.session.get("x"), Some(&Value::Int(0)));
        assert_eq!(app.dragging, None);
    }

    #[test]
    fn release_ends_the_drag() {
        let mut app = app();
        let area = Rect::new(0, 0, 100, 30);
        let track = ui::slider::track_area(ui::layout(area, &app).controls[0]);

        let press = mouse(MouseEventKind::Down(MouseButton::Left), track.x, track.y);
        handle_mouse(&mut app, press, area);
        assert_eq!(app.dragging, Some(0));

        let release = mouse(MouseEventKind::Up(MouseButton::Left), track.x, track.y);
        handle_mouse(&mut app, release, area);
        assert_eq!(app.dragging, None);

        let end = track.x + track.width - 1;
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), end, track.y);
        handle_mouse(&mut app, drag, area);
        assert_eq!(app.session.get("x"), Some(&Value::Int(0)));
    }
}
