//! Two-phase session setup.
//!
//! [`Seeded::seed`] builds the state container around the attached outputs
//! and renders every input, which seeds its default silently. Only a
//! [`Seeded`] value can be turned into a [`Session`], and that is the step
//! that mounts the outputs and draws them for the first time, so outputs
//! never see a state without the input defaults.

use indexmap::IndexMap;

use crate::input::{Control, Input};
use crate::output::{Canvas, Output};
use crate::state::{RefreshError, StateMap, UiState};
use crate::value::Value;

/// Inputs rendered and defaults seeded; outputs not yet mounted.
#[derive(Debug)]
pub struct Seeded {
    state: UiState<Output>,
    controls: Vec<Control>,
}

impl Seeded {
    pub fn seed(parameters: &IndexMap<String, Input>, outputs: Vec<Output>) -> Self {
        let mut state = UiState::new(outputs);
        let controls = parameters
            .iter()
            .map(|(name, input)| input.render(name, &mut state))
            .collect();
        tracing::debug!(state = %state.snapshot_json(), "inputs seeded");
        Self { state, controls }
    }

    pub fn values(&self) -> &StateMap {
        self.state.values()
    }

    /// Mount every output and render it against the seeded state.
    pub fn mount(mut self) -> Session {
        for output in self.state.observers_mut() {
            output.mount();
        }
        let startup_error = self.state.refresh_all().err();
        Session {
            state: self.state,
            controls: self.controls,
            startup_error,
        }
    }
}

/// A live display session: controls, outputs and their shared state.
#[derive(Debug)]
pub struct Session {
    state: UiState<Output>,
    controls: Vec<Control>,
    startup_error: Option<RefreshError>,
}

impl Session {
    pub fn values(&self) -> &StateMap {
        self.state.values()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn outputs(&self) -> &[Output] {
        self.state.observers()
    }

    /// Serialized state, for logs.
    pub fn snapshot_json(&self) -> String {
        self.state.snapshot_json()
    }

    /// Failure from the first render, if any.
    pub fn startup_error(&self) -> Option<&RefreshError> {
        self.startup_error.as_ref()
    }

    /// Move control `index` by `steps`. Unknown indices are ignored.
    pub fn nudge(&mut self, index: usize, steps: i64) -> Result<bool, RefreshError> {
        match self.controls.get_mut(index) {
            Some(control) => control.nudge(steps, &mut self.state),
            None => Ok(false),
        }
    }

    /// Move control `index` to a fraction of its range.
    pub fn set_fraction(&mut self, index: usize, fraction: f64) -> Result<bool, RefreshError> {
        match self.controls.get_mut(index) {
            Some(control) => control.set_fraction(fraction, &mut self.state),
            None => Ok(false),
        }
    }

    /// Toolbar access to the canvas of output `index`, if it is a plot.
    pub fn canvas_mut(&mut self, index: usize) -> Option<&mut Canvas> {
        match self.state.observers_mut().get_mut(index)? {
            Output::Plot(plot) => plot.canvas_mut(),
            Output::Label(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Slider;
    use crate::output::{Label, Plot};

    fn params() -> IndexMap<String, Input> {
        let mut params = IndexMap::new();
        params.insert("a".to_string(), Slider::new(1, 5).into());
        params.insert("b".to_string(), Slider::new(0.0, 1.0).step(0.25).into());
        params
    }

    #[test]
    fn seed_phase_fills_defaults_without_mounting() {
        let seeded = Seeded::seed(&params(), vec![Label::new(|kw| kw.f64("a")).into()]);
        assert_eq!(seeded.values().get("a"), Some(&Value::Int(1)));
        assert_eq!(seeded.values().get("b"), Some(&Value::Float(0.0)));
        assert!(!seeded.state.observers()[0].is_mounted());
    }

    #[test]
    fn mount_renders_outputs_against_seeded_state() {
        let label = Label::new(|kw| Ok(kw.i64("a")? * 10));
        let session = Seeded::seed(&params(), vec![label.into()]).mount();
        assert!(session.startup_error().is_none());
        match &session.outputs()[0] {
            Output::Label(label) => assert_eq!(label.text(), "10"),
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn startup_failure_is_kept_not_fatal() {
        let label = Label::new(|kw| kw.f64("missing"));
        let session = Seeded::seed(&params(), vec![label.into()]).mount();
        let err = session.startup_error().unwrap();
        assert_eq!(err.index, 0);
    }

    #[test]
    fn nudge_and_canvas_access() {
        let plot = Plot::new(|kw| Ok(vec![kw.f64("a")?, kw.f64("b")?]));
        let label = Label::new(|kw| kw.get("b").cloned());
        let mut session = Seeded::seed(&params(), vec![plot.into(), label.into()]).mount();

        assert!(session.nudge(1, 2).unwrap());
        assert_eq!(session.get("b"), Some(&Value::Float(0.5)));
        assert!(!session.nudge(7, 1).unwrap());

        assert!(session.canvas_mut(0).is_some());
        assert!(session.canvas_mut(1).is_none());
        let canvas = session.canvas_mut(0).unwrap();
        assert_eq!(canvas.subplot().series()[0].ys, vec![1.0, 0.5]);
    }
}
