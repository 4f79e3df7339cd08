//! QuickUI terminal host — opens a [`QuickUi`] description as a live window.
//!
//! Provides:
//! - Window layout with sliders, labels and plots stacked top to bottom
//! - Keyboard and mouse control of sliders, toolbar navigation for plots
//! - Status bar, key help and error history overlays
//!
//! ```no_run
//! use quickui_core::{forall, Label, Slider};
//! use quickui_tui::ShowExt;
//!
//! forall([("x", Slider::new(0, 10))])
//!     .attach([Label::new(|kw| Ok(kw.i64("x")? * 2))])
//!     .show()
//!     .unwrap();
//! ```

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;

use quickui_core::{QuickUi, Style};

pub use app::AppState;
pub use theme::Theme;

/// Input poll timeout (~20 FPS tick).
const TICK: Duration = Duration::from_millis(50);

/// Explicit display entry point for a UI description.
pub trait ShowExt {
    /// Open the window with the default style and block until it closes.
    fn show(self) -> Result<()>;

    /// Open the window with `style` and block until it closes.
    fn show_with_style(self, style: Style) -> Result<()>;
}

impl ShowExt for QuickUi {
    fn show(self) -> Result<()> {
        self.show_with_style(Style::default())
    }

    fn show_with_style(self, style: Style) -> Result<()> {
        run(self, style)
    }
}

/// Seed, mount and run `ui` in the terminal until the user quits.
pub fn run(ui: QuickUi, style: Style) -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let session = ui.into_session();
    tracing::info!(
        controls = session.controls().len(),
        outputs = session.outputs().len(),
        "session mounted"
    );
    let mut app = AppState::new(session, style);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(state = %app.session.snapshot_json(), "session closed");
    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    input::handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
