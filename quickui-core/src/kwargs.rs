//! Named-argument view of the state handed to output callbacks.

use thiserror::Error;

use crate::state::StateMap;
use crate::value::Value;

/// Failure raised from inside a label or plot callback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallbackError {
    #[error("missing argument '{0}'")]
    MissingArgument(String),
    #[error("argument '{name}' is {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("x and y must have the same length, got {x_len} and {y_len}")]
    ShapeMismatch { x_len: usize, y_len: usize },
    #[error("{0}")]
    Failed(String),
}

impl CallbackError {
    /// Free-form failure for user callbacks.
    pub fn msg(message: impl Into<String>) -> Self {
        CallbackError::Failed(message.into())
    }
}

/// Borrowed, read-only view of every state entry, looked up by name.
#[derive(Debug, Clone, Copy)]
pub struct Kwargs<'a> {
    values: &'a StateMap,
}

impl<'a> Kwargs<'a> {
    pub fn new(values: &'a StateMap) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Result<&'a Value, CallbackError> {
        self.values
            .get(name)
            .ok_or_else(|| CallbackError::MissingArgument(name.to_string()))
    }

    pub fn f64(&self, name: &str) -> Result<f64, CallbackError> {
        let value = self.get(name)?;
        value.as_f64().ok_or_else(|| mismatch(name, "number", value))
    }

    pub fn i64(&self, name: &str) -> Result<i64, CallbackError> {
        let value = self.get(name)?;
        value.as_i64().ok_or_else(|| mismatch(name, "int", value))
    }

    pub fn str(&self, name: &str) -> Result<&'a str, CallbackError> {
        let value = self.get(name)?;
        value.as_str().ok_or_else(|| mismatch(name, "text", value))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn mismatch(name: &str, expected: &'static str, found: &Value) -> CallbackError {
    CallbackError::TypeMismatch {
        name: name.to_string(),
        expected,
        found: found.type_name(),
    }
}
