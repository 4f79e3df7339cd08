//! QuickUI core — declarative binding of input controls to output displays.
//!
//! This crate is UI-host agnostic:
//! - `UiState` — the shared name→value map with silent and notifying sets
//! - `Slider` input, `Label` and `Plot` outputs
//! - `forall(...).attach(...)` builder and the two-phase `Session` setup
//! - `Style` — immutable look-and-feel configuration, loadable from TOML
//!
//! Drawing, input handling and the event loop live in `quickui-tui`.

pub mod input;
pub mod kwargs;
pub mod output;
pub mod quickui;
pub mod session;
pub mod state;
pub mod style;
pub mod value;

pub use input::{Control, Input, Slider, SliderControl};
pub use kwargs::{CallbackError, Kwargs};
pub use output::{Bounds, Canvas, IntoSeries, Label, Output, Plot, Series, Subplot};
pub use quickui::{forall, QuickUi};
pub use session::{Seeded, Session};
pub use state::{Observer, RefreshError, StateMap, UiState};
pub use style::{Marker, Rgb, Style, StyleError};
pub use value::Value;
