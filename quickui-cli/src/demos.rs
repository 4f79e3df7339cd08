//! Bundled demo UIs.

use clap::ValueEnum;

use quickui_core::{forall, CallbackError, Label, Output, Plot, QuickUi, Series, Slider};

/// Points sampled per plotted curve.
const SAMPLES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// One slider, one label showing x + 1.
    Counter,
    /// Amplitude/frequency/phase sliders driving a sine wave.
    Sine,
    /// Two frequency sliders tracing a Lissajous figure.
    Lissajous,
}

impl Demo {
    pub fn build(self) -> QuickUi {
        match self {
            Demo::Counter => counter(),
            Demo::Sine => sine(),
            Demo::Lissajous => lissajous(),
        }
    }
}

fn counter() -> QuickUi {
    forall([("x", Slider::new(0, 10))]).attach([Label::new(|kw| Ok(kw.i64("x")? + 1))])
}

fn sine() -> QuickUi {
    forall([
        ("amplitude", Slider::new(1, 10)),
        ("frequency", Slider::new(1, 5)),
        ("phase", Slider::new(0.0, 3.2).step(0.1)),
    ])
    .attach([
        Output::from(Label::new(|kw| {
            Ok(format!(
                "y = {} · sin({} · x + {})",
                kw.get("amplitude")?,
                kw.get("frequency")?,
                kw.get("phase")?
            ))
        })),
        Plot::new(|kw| {
            let a = kw.f64("amplitude")?;
            let f = kw.f64("frequency")?;
            let p = kw.f64("phase")?;
            let xs = linspace(0.0, std::f64::consts::TAU, SAMPLES);
            let ys: Vec<f64> = xs.iter().map(|x| a * (f * x + p).sin()).collect();
            Ok((xs, ys))
        })
        .into(),
    ])
}

fn lissajous() -> QuickUi {
    forall([("a", Slider::new(1, 9)), ("b", Slider::new(1, 9))]).attach([
        Output::from(Label::new(|kw| {
            let a = kw.i64("a")?;
            let b = kw.i64("b")?;
            Ok(format!("ratio {a}:{b}"))
        })),
        Plot::new(|kw| -> Result<Vec<Series>, CallbackError> {
            let a = kw.f64("a")?;
            let b = kw.f64("b")?;
            let ts = linspace(0.0, std::f64::consts::TAU, SAMPLES * 2);
            let xs = ts.iter().map(|t| (a * t).sin()).collect();
            let ys = ts.iter().map(|t| (b * t).cos()).collect();
            Ok(vec![Series::new(xs, ys)])
        })
        .into(),
    ])
}

/// `n` evenly spaced points from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
