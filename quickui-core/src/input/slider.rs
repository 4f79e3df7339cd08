//! Horizontal range slider.
//!
//! A [`Slider`] definition is immutable. Rendering it against a state seeds the
//! lower bound silently and yields a [`SliderControl`], the live handle that
//! writes every user-driven change back through the notifying set.

use crate::state::{Observer, RefreshError, UiState};
use crate::value::Value;

/// Largest number of decimal places a bound or step is rounded to.
const MAX_DECIMALS: u32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Slider {
    /// Slider from `start` to `end` with a step of 1.
    pub fn new(start: impl Into<f64>, end: impl Into<f64>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            step: 1.0,
        }
    }

    pub fn step(mut self, step: impl Into<f64>) -> Self {
        self.step = step.into();
        self
    }

    /// Tick spacing: one tick at each end of the range.
    pub fn tick_interval(&self) -> f64 {
        (self.start - self.end).abs()
    }

    /// Step actually used for keyboard movement.
    pub fn effective_step(&self) -> f64 {
        if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else if self.tick_interval() > 0.0 {
            self.tick_interval() / 100.0
        } else {
            1.0
        }
    }

    fn decimals(&self) -> u32 {
        decimals(self.start)
            .max(decimals(self.end))
            .max(decimals(self.effective_step()))
    }

    /// True when every reachable value is a whole number.
    pub fn is_integral(&self) -> bool {
        self.decimals() == 0
    }

    /// Snap `raw` onto the step grid anchored at `start`, within the bounds.
    pub fn quantize(&self, raw: f64) -> f64 {
        let lo = self.start.min(self.end);
        let hi = self.start.max(self.end);
        if raw.is_nan() {
            return self.start;
        }
        let step = self.effective_step();
        let clamped = raw.clamp(lo, hi);
        let mut snapped = self.start + ((clamped - self.start) / step).round() * step;
        if snapped > hi {
            snapped -= step;
        }
        if snapped < lo {
            snapped += step;
        }
        round_to(snapped.clamp(lo, hi), self.decimals())
    }

    /// The state value for a (quantized) position.
    pub fn value_of(&self, position: f64) -> Value {
        if self.is_integral() {
            Value::Int(position.round() as i64)
        } else {
            Value::Float(position)
        }
    }

    /// Seed the lower bound under `name` and return the live control.
    pub fn render<O>(&self, name: &str, state: &mut UiState<O>) -> SliderControl {
        let value = self.quantize(self.start);
        state.set_silent(name, self.value_of(value));
        SliderControl {
            name: name.to_string(),
            spec: self.clone(),
            value,
        }
    }
}

/// A rendered slider bound to one state key.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderControl {
    name: String,
    spec: Slider,
    value: f64,
}

impl SliderControl {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spec(&self) -> &Slider {
        &self.spec
    }

    pub fn position(&self) -> f64 {
        self.value
    }

    pub fn value(&self) -> Value {
        self.spec.value_of(self.value)
    }

    /// Position along the track, 0 at `start` and 1 at `end`.
    pub fn fraction(&self) -> f64 {
        let span = self.spec.end - self.spec.start;
        if span == 0.0 {
            0.0
        } else {
            ((self.value - self.spec.start) / span).clamp(0.0, 1.0)
        }
    }

    /// Move to `raw` (snapped). Notifies only if the snapped value changed.
    pub fn set_position<O: Observer>(
        &mut self,
        raw: f64,
        state: &mut UiState<O>,
    ) -> Result<bool, RefreshError> {
        let next = self.spec.quantize(raw);
        if next == self.value {
            return Ok(false);
        }
        self.value = next;
        state.set(self.name.as_str(), self.spec.value_of(next))?;
        Ok(true)
    }

    /// Move `steps` steps towards `end` (negative moves towards `start`).
    pub fn nudge<O: Observer>(
        &mut self,
        steps: i64,
        state: &mut UiState<O>,
    ) -> Result<bool, RefreshError> {
        let direction = if self.spec.end >= self.spec.start { 1.0 } else { -1.0 };
        let raw = self.value + steps as f64 * self.spec.effective_step() * direction;
        self.set_position(raw, state)
    }

    /// Move to a fraction of the track, as from a mouse click.
    pub fn set_fraction<O: Observer>(
        &mut self,
        fraction: f64,
        state: &mut UiState<O>,
    ) -> Result<bool, RefreshError> {
        let fraction = fraction.clamp(0.0, 1.0);
        let raw = self.spec.start + fraction * (self.spec.end - self.spec.start);
        self.set_position(raw, state)
    }
}

fn decimals(x: f64) -> u32 {
    if !x.is_finite() {
        return 0;
    }
    (0..MAX_DECIMALS)
        .find(|&d| {
            let scaled = x * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(MAX_DECIMALS)
}

fn round_to(x: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (x * factor).round() / factor
}
