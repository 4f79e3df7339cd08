//! Application state — single-owner, main-thread only.
//!
//! Wraps the live [`Session`] with everything the terminal host needs on top
//! of it: focus, overlays, the status line and the error history.

use std::collections::VecDeque;

use chrono::NaiveDateTime;

use quickui_core::{Output, RefreshError, Session, Style};

use crate::theme::Theme;

/// Most error records kept for the history overlay.
const ERROR_HISTORY_CAP: usize = 50;

/// Something that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Index into the session's controls.
    Control(usize),
    /// Index into the session's outputs; always a plot.
    Plot(usize),
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Where a recorded error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// First render after mounting.
    Startup,
    /// Refresh triggered by an input change.
    Refresh,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Startup => "INIT",
            ErrorCategory::Refresh => "REFRESH",
        }
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    pub session: Session,
    pub style: Style,
    pub theme: Theme,

    // Navigation
    pub focus: usize,
    pub running: bool,
    pub overlay: Overlay,
    /// Slider grabbed by the current mouse press, if any.
    pub dragging: Option<usize>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
}

impl AppState {
    pub fn new(session: Session, style: Style) -> Self {
        let theme = Theme::from_style(&style);
        let mut app = Self {
            session,
            style,
            theme,
            focus: 0,
            running: true,
            overlay: Overlay::None,
            dragging: None,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
        };
        if let Some(err) = app.session.startup_error().cloned() {
            let context = describe_output(&app.session, err.index);
            app.push_error(ErrorCategory::Startup, err.to_string(), context);
        }
        app
    }

    /// Every focusable widget in display order: controls first, then plots.
    pub fn focus_targets(&self) -> Vec<Focus> {
        let controls = (0..self.session.controls().len()).map(Focus::Control);
        let plots = self
            .session
            .outputs()
            .iter()
            .enumerate()
            .filter(|(_, o)| matches!(o, Output::Plot(_)))
            .map(|(i, _)| Focus::Plot(i));
        controls.chain(plots).collect()
    }

    pub fn current_focus(&self) -> Option<Focus> {
        self.focus_targets().get(self.focus).copied()
    }

    pub fn is_focused(&self, target: Focus) -> bool {
        self.current_focus() == Some(target)
    }

    pub fn focus_next(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Focus a specific target if it exists.
    pub fn focus_on(&mut self, target: Focus) {
        if let Some(pos) = self.focus_targets().iter().position(|t| *t == target) {
            self.focus = pos;
        }
    }

    /// Record the outcome of a control change on control `index`.
    pub fn record_change(&mut self, index: usize, result: Result<bool, RefreshError>) {
        let Some(control) = self.session.controls().get(index) else {
            return;
        };
        let context = format!("{} = {}", control.name(), control.value());
        match result {
            Ok(true) => self.set_status(context),
            Ok(false) => {}
            Err(err) => {
                let message = format!("{} ({})", err, describe_output(&self.session, err.index));
                self.push_error(ErrorCategory::Refresh, message, context);
            }
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        tracing::warn!(category = category.label(), %message, %context, "ui error");
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

fn describe_output(session: &Session, index: usize) -> String {
    match session.outputs().get(index) {
        Some(output) => format!("{} #{}", output.kind(), index + 1),
        None => format!("output #{}", index + 1),
    }
}
