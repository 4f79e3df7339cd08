//! Input widgets — controls that originate state changes.

pub mod slider;

pub use slider::{Slider, SliderControl};

use crate::state::{Observer, RefreshError, UiState};
use crate::value::Value;

/// An input widget description, keyed by parameter name in the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Slider(Slider),
}

impl Input {
    /// Seed this input's default under `name` and return its live control.
    pub fn render<O>(&self, name: &str, state: &mut UiState<O>) -> Control {
        match self {
            Input::Slider(slider) => Control::Slider(slider.render(name, state)),
        }
    }
}

impl From<Slider> for Input {
    fn from(slider: Slider) -> Self {
        Input::Slider(slider)
    }
}

/// A rendered input, owned by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Slider(SliderControl),
}

impl Control {
    pub fn name(&self) -> &str {
        match self {
            Control::Slider(s) => s.name(),
        }
    }

    pub fn value(&self) -> Value {
        match self {
            Control::Slider(s) => s.value(),
        }
    }

    pub fn as_slider(&self) -> Option<&SliderControl> {
        match self {
            Control::Slider(s) => Some(s),
        }
    }

    /// Move by `steps` increments.
    pub fn nudge<O: Observer>(
        &mut self,
        steps: i64,
        state: &mut UiState<O>,
    ) -> Result<bool, RefreshError> {
        match self {
            Control::Slider(s) => s.nudge(steps, state),
        }
    }

    /// Jump to a fraction of the control's range (0 = start, 1 = end).
    pub fn set_fraction<O: Observer>(
        &mut self,
        fraction: f64,
        state: &mut UiState<O>,
    ) -> Result<bool, RefreshError> {
        match self {
            Control::Slider(s) => s.set_fraction(fraction, state),
        }
    }
}
