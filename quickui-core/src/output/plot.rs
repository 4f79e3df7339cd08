//! Plot output: a figure with one subplot plus a navigation toolbar.
//!
//! Each refresh clears the subplot, asks the callback for series, plots them
//! and bumps the canvas draw counter. The toolbar keeps a back/forward stack
//! of views; `None` in that stack means "autoscale to the data".

use std::fmt;

use crate::kwargs::{CallbackError, Kwargs};
use crate::state::StateMap;

/// Fractional margin added around the data when autoscaling.
const AUTOSCALE_MARGIN: f64 = 0.05;

/// One plotted line: x values against y values.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Series {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs, ys }
    }

    /// y values against their indices.
    pub fn from_ys(ys: Vec<f64>) -> Self {
        let xs = (0..ys.len()).map(|i| i as f64).collect();
        Self { xs, ys }
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Series {
    fn from((xs, ys): (Vec<f64>, Vec<f64>)) -> Self {
        Series::new(xs, ys)
    }
}

impl From<Vec<f64>> for Series {
    fn from(ys: Vec<f64>) -> Self {
        Series::from_ys(ys)
    }
}

/// Anything a plot callback may return.
pub trait IntoSeries {
    fn into_series(self) -> Vec<Series>;
}

impl IntoSeries for Series {
    fn into_series(self) -> Vec<Series> {
        vec![self]
    }
}

impl IntoSeries for (Vec<f64>, Vec<f64>) {
    fn into_series(self) -> Vec<Series> {
        vec![self.into()]
    }
}

impl IntoSeries for Vec<f64> {
    fn into_series(self) -> Vec<Series> {
        vec![self.into()]
    }
}

impl IntoSeries for Vec<Series> {
    fn into_series(self) -> Vec<Series> {
        self
    }
}

impl IntoSeries for Vec<(Vec<f64>, Vec<f64>)> {
    fn into_series(self) -> Vec<Series> {
        self.into_iter().map(Series::from).collect()
    }
}

/// Axis limits of a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    pub fn height(&self) -> f64 {
        self.y[1] - self.y[0]
    }

    fn scaled(&self, factor: f64) -> Bounds {
        Bounds {
            x: scale_axis(self.x, factor),
            y: scale_axis(self.y, factor),
        }
    }

    fn shifted(&self, dx: f64, dy: f64) -> Bounds {
        Bounds {
            x: [self.x[0] + dx, self.x[1] + dx],
            y: [self.y[0] + dy, self.y[1] + dy],
        }
    }
}

fn scale_axis([lo, hi]: [f64; 2], factor: f64) -> [f64; 2] {
    let mid = (lo + hi) / 2.0;
    let half = (hi - lo) / 2.0 * factor;
    [mid - half, mid + half]
}

fn autoscale_axis(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        return [0.0, 1.0];
    }
    if lo == hi {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * AUTOSCALE_MARGIN };
        return [lo - pad, hi + pad];
    }
    let pad = (hi - lo) * AUTOSCALE_MARGIN;
    [lo - pad, hi + pad]
}

/// The single subplot of a figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subplot {
    series: Vec<Series>,
    view: Option<Bounds>,
}

impl Subplot {
    /// Remove every series and return to autoscaled limits.
    pub fn clear(&mut self) {
        self.series.clear();
        self.view = None;
    }

    /// Add series to the subplot. All series are checked before any is added.
    pub fn plot(&mut self, series: Vec<Series>) -> Result<(), CallbackError> {
        if let Some(bad) = series.iter().find(|s| s.xs.len() != s.ys.len()) {
            return Err(CallbackError::ShapeMismatch {
                x_len: bad.xs.len(),
                y_len: bad.ys.len(),
            });
        }
        self.series.extend(series);
        Ok(())
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Data limits with a 5% margin.
    pub fn autoscale(&self) -> Bounds {
        Bounds {
            x: autoscale_axis(self.series.iter().flat_map(|s| s.xs.iter().copied())),
            y: autoscale_axis(self.series.iter().flat_map(|s| s.ys.iter().copied())),
        }
    }

    /// Limits currently shown.
    pub fn view(&self) -> Bounds {
        self.view.unwrap_or_else(|| self.autoscale())
    }

    pub fn is_autoscaled(&self) -> bool {
        self.view.is_none()
    }
}

/// A mounted chart: the subplot plus toolbar navigation history.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    subplot: Subplot,
    history: Vec<Option<Bounds>>,
    position: usize,
    draws: u64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            subplot: Subplot::default(),
            history: vec![None],
            position: 0,
            draws: 0,
        }
    }
}

impl Canvas {
    pub fn subplot(&self) -> &Subplot {
        &self.subplot
    }

    /// Number of completed redraws.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    fn push_view(&mut self, view: Option<Bounds>) {
        self.history.truncate(self.position + 1);
        self.history.push(view);
        self.position = self.history.len() - 1;
        self.subplot.view = view;
    }

    /// Scale the view around its centre; factors below 1 zoom in.
    pub fn zoom(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let next = self.subplot.view().scaled(factor);
        self.push_view(Some(next));
    }

    /// Shift the view by fractions of its width and height.
    pub fn pan(&mut self, fx: f64, fy: f64) {
        let view = self.subplot.view();
        let next = view.shifted(fx * view.width(), fy * view.height());
        self.push_view(Some(next));
    }

    /// Return to autoscaled limits.
    pub fn home(&mut self) {
        self.push_view(None);
    }

    /// Step back through the view history. Returns false at the oldest view.
    pub fn back(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        self.subplot.view = self.history[self.position];
        true
    }

    /// Step forward through the view history. Returns false at the newest view.
    pub fn forward(&mut self) -> bool {
        if self.position + 1 >= self.history.len() {
            return false;
        }
        self.position += 1;
        self.subplot.view = self.history[self.position];
        true
    }
}

type PlotFn = Box<dyn Fn(&Kwargs<'_>) -> Result<Vec<Series>, CallbackError>>;

/// A plot whose series are derived from the state by a callback.
pub struct Plot {
    callback: PlotFn,
    canvas: Option<Canvas>,
}

impl Plot {
    pub fn new<F, T>(callback: F) -> Self
    where
        F: Fn(&Kwargs<'_>) -> Result<T, CallbackError> + 'static,
        T: IntoSeries,
    {
        Self {
            callback: Box::new(move |kwargs| callback(kwargs).map(IntoSeries::into_series)),
            canvas: None,
        }
    }

    /// Create the figure, its subplot and the toolbar history.
    pub fn mount(&mut self) {
        self.canvas = Some(Canvas::default());
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn canvas_mut(&mut self) -> Option<&mut Canvas> {
        self.canvas.as_mut()
    }

    /// Clear, re-plot from the callback and redraw.
    ///
    /// The subplot is cleared before the callback runs, so a failing callback
    /// leaves an empty plot. A custom view is replaced by a fresh autoscale
    /// entry in the history, so `back` still reaches it. An unmounted plot
    /// mounts itself first.
    pub fn refresh(&mut self, state: &StateMap) -> Result<(), CallbackError> {
        let canvas = self.canvas.get_or_insert_with(Canvas::default);
        if !canvas.subplot.is_autoscaled() {
            canvas.push_view(None);
        }
        canvas.subplot.clear();
        let series = (self.callback)(&Kwargs::new(state))?;
        canvas.subplot.plot(series)?;
        canvas.draws += 1;
        Ok(())
    }
}

impl fmt::Debug for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plot")
            .field("canvas", &self.canvas)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn state_with_x(x: i64) -> StateMap {
        let mut map = StateMap::new();
        map.insert("x".into(), Value::Int(x));
        map
    }

    fn constant_plot() -> Plot {
        Plot::new(|kw| {
            let x = kw.f64("x")?;
            Ok((vec![1.0_f64, 2.0, 3.0], vec![x, x, x]))
        })
    }

    #[test]
    fn subplot_receives_callback_series() {
        let mut plot = constant_plot();
        plot.mount();
        plot.refresh(&state_with_x(2)).unwrap();
        let canvas = plot.canvas().unwrap();
        assert_eq!(
            canvas.subplot().series(),
            &[Series::new(vec![1.0, 2.0, 3.0], vec![2.0, 2.0, 2.0])]
        );
        assert_eq!(canvas.draws(), 1);
    }

    #[test]
    fn refresh_replaces_previous_series() {
        let mut plot = constant_plot();
        plot.refresh(&state_with_x(1)).unwrap();
        plot.refresh(&state_with_x(5)).unwrap();
        let series = plot.canvas().unwrap().subplot().series();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].ys, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn y_only_series_use_indices() {
        let mut plot = Plot::new(|_| Ok(vec![4.0_f64, 5.0]));
        plot.refresh(&StateMap::new()).unwrap();
        let series = &plot.canvas().unwrap().subplot().series()[0];
        assert_eq!(series.points(), vec![(0.0, 4.0), (1.0, 5.0)]);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let mut plot = Plot::new(|_| Ok((vec![1.0_f64, 2.0], vec![1.0_f64])));
        let err = plot.refresh(&StateMap::new()).unwrap_err();
        assert_eq!(err, CallbackError::ShapeMismatch { x_len: 2, y_len: 1 });
        assert!(plot.canvas().unwrap().subplot().series().is_empty());
    }

    #[test]
    fn autoscale_adds_margin() {
        let mut subplot = Subplot::default();
        subplot
            .plot(vec![Series::new(vec![0.0, 10.0], vec![-1.0, 1.0])])
            .unwrap();
        let b = subplot.autoscale();
        assert_eq!(b.x, [-0.5, 10.5]);
        assert!((b.y[0] + 1.1).abs() < 1e-12);
        assert!((b.y[1] - 1.1).abs() < 1e-12);
    }

    #[test]
    fn flat_and_empty_data_get_nonsingular_limits() {
        let mut subplot = Subplot::default();
        assert_eq!(subplot.autoscale().x, [0.0, 1.0]);
        subplot.plot(vec![Series::from_ys(vec![2.0, 2.0])]).unwrap();
        let y = subplot.autoscale().y;
        assert!((y[0] - 1.9).abs() < 1e-12 && (y[1] - 2.1).abs() < 1e-12);
    }

    #[test]
    fn toolbar_zoom_pan_home_history() {
        let mut plot = constant_plot();
        plot.refresh(&state_with_x(0)).unwrap();
        let canvas = plot.canvas_mut().unwrap();
        let home = canvas.subplot().view();

        canvas.zoom(0.5);
        let zoomed = canvas.subplot().view();
        assert!((zoomed.width() - home.width() / 2.0).abs() < 1e-12);

        canvas.pan(0.5, 0.0);
        let panned = canvas.subplot().view();
        assert!((panned.x[0] - (zoomed.x[0] + zoomed.width() / 2.0)).abs() < 1e-12);

        assert!(canvas.back());
        assert_eq!(canvas.subplot().view(), zoomed);
        assert!(canvas.forward());
        assert_eq!(canvas.subplot().view(), panned);
        assert!(!canvas.forward());

        canvas.home();
        assert!(canvas.subplot().is_autoscaled());
        assert_eq!(canvas.subplot().view(), home);
    }

    #[test]
    fn back_after_refresh_restores_custom_view() {
        let mut plot = constant_plot();
        plot.refresh(&state_with_x(0)).unwrap();
        let canvas = plot.canvas_mut().unwrap();
        canvas.zoom(0.5);
        let zoomed = canvas.subplot().view();

        plot.refresh(&state_with_x(0)).unwrap();
        let canvas = plot.canvas_mut().unwrap();
        assert!(canvas.subplot().is_autoscaled());

        assert!(canvas.back());
        assert_eq!(canvas.subplot().view(), zoomed);
        assert!(canvas.forward());
        assert!(canvas.subplot().is_autoscaled());
        assert!(!canvas.forward());
    }

    #[test]
    fn refresh_in_autoscale_keeps_history_short() {
        let mut plot = constant_plot();
        plot.refresh(&state_with_x(0)).unwrap();
        plot.refresh(&state_with_x(1)).unwrap();
        assert!(!plot.canvas_mut().unwrap().back());
    }

    #[test]
    fn zoom_ignores_degenerate_factors() {
        let mut canvas = Canvas::default();
        canvas.zoom(0.0);
        canvas.zoom(f64::NAN);
        assert!(!canvas.back());
    }
}
