//! Output widgets — displays derived from the state by callbacks.

pub mod label;
pub mod plot;

pub use label::{Label, LabelDisplay};
pub use plot::{Bounds, Canvas, IntoSeries, Plot, Series, Subplot};

use crate::kwargs::CallbackError;
use crate::state::{Observer, StateMap};

#[derive(Debug)]
pub enum Output {
    Label(Label),
    Plot(Plot),
}

impl Output {
    /// Create the display handle (text buffer or chart canvas).
    pub fn mount(&mut self) {
        match self {
            Output::Label(label) => label.mount(),
            Output::Plot(plot) => plot.mount(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        match self {
            Output::Label(label) => label.display().is_some(),
            Output::Plot(plot) => plot.canvas().is_some(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Output::Label(_) => "label",
            Output::Plot(_) => "plot",
        }
    }

    pub fn refresh(&mut self, state: &StateMap) -> Result<(), CallbackError> {
        match self {
            Output::Label(label) => label.refresh(state),
            Output::Plot(plot) => plot.refresh(state),
        }
    }
}

impl Observer for Output {
    fn refresh(&mut self, state: &StateMap) -> Result<(), CallbackError> {
        Output::refresh(self, state)
    }
}

impl From<Label> for Output {
    fn from(label: Label) -> Self {
        Output::Label(label)
    }
}

impl From<Plot> for Output {
    fn from(plot: Plot) -> Self {
        Output::Plot(plot)
    }
}
