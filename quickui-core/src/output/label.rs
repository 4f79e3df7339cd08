//! Text label output.

use std::fmt;

use crate::kwargs::{CallbackError, Kwargs};
use crate::state::StateMap;

type LabelFn = Box<dyn Fn(&Kwargs<'_>) -> Result<String, CallbackError>>;

/// A label whose text is derived from the state by a callback.
pub struct Label {
    callback: LabelFn,
    display: Option<LabelDisplay>,
}

/// The mounted text buffer of a label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDisplay {
    text: String,
}

impl LabelDisplay {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Label {
    pub fn new<F, T>(callback: F) -> Self
    where
        F: Fn(&Kwargs<'_>) -> Result<T, CallbackError> + 'static,
        T: fmt::Display,
    {
        Self {
            callback: Box::new(move |kwargs| callback(kwargs).map(|v| v.to_string())),
            display: None,
        }
    }

    /// Create the (empty) text display.
    pub fn mount(&mut self) {
        self.display = Some(LabelDisplay::default());
    }

    pub fn display(&self) -> Option<&LabelDisplay> {
        self.display.as_ref()
    }

    /// Current text, empty until the first refresh.
    pub fn text(&self) -> &str {
        self.display.as_ref().map(LabelDisplay::text).unwrap_or("")
    }

    /// Re-run the callback and replace the text in place.
    ///
    /// An unmounted label mounts itself first. On failure the previous text
    /// is left untouched.
    pub fn refresh(&mut self, state: &StateMap) -> Result<(), CallbackError> {
        let text = (self.callback)(&Kwargs::new(state))?;
        self.display.get_or_insert_with(LabelDisplay::default).text = text;
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("display", &self.display)
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

    #[test]
    fn renders_callback_result_as_text() {
        let mut label = Label::new(|kw| Ok(kw.i64("x")? + 1));
        label.mount();
        assert_eq!(label.text(), "");
        label.refresh(&state_with_x(4)).unwrap();
        assert_eq!(label.text(), "5");
    }

    #[test]
    fn failed_refresh_keeps_previous_text() {
        let mut label = Label::new(|kw| Ok(format!("y = {}", kw.f64("y")?)));
        label.mount();
        let mut map = state_with_x(1);
        map.insert("y".into(), Value::Float(0.5));
        label.refresh(&map).unwrap();
        let err = label.refresh(&state_with_x(1)).unwrap_err();
        assert_eq!(err, CallbackError::MissingArgument("y".into()));
        assert_eq!(label.text(), "y = 0.5");
    }

    #[test]
    fn state_values_format_like_str() {
        let mut label = Label::new(|kw| kw.get("x").cloned());
        label.refresh(&state_with_x(9)).unwrap();
        assert_eq!(label.text(), "9");
    }
}
