//! State container — the shared name→value map plus its observers.
//!
//! Inputs write through [`UiState::set`], which stores the value and then
//! refreshes every observer in registration order before returning. Seeding
//! uses [`UiState::set_silent`], which never notifies.

use indexmap::IndexMap;
use thiserror::Error;

use crate::kwargs::CallbackError;
use crate::value::Value;

/// Current application state, in insertion order.
pub type StateMap = IndexMap<String, Value>;

/// Something that re-renders itself from the full state.
pub trait Observer {
    fn refresh(&mut self, state: &StateMap) -> Result<(), CallbackError>;
}

impl<T: Observer + ?Sized> Observer for Box<T> {
    fn refresh(&mut self, state: &StateMap) -> Result<(), CallbackError> {
        (**self).refresh(state)
    }
}

/// A refresh that failed partway through a notification pass.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("output #{} failed to refresh: {source}", .index + 1)]
pub struct RefreshError {
    /// Position of the failing observer in registration order (zero-based).
    pub index: usize,
    #[source]
    pub source: CallbackError,
}

/// The state map bound to its observers for one display session.
#[derive(Debug)]
pub struct UiState<O> {
    values: StateMap,
    observers: Vec<O>,
}

impl<O> Default for UiState<O> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<O> UiState<O> {
    pub fn new(observers: Vec<O>) -> Self {
        Self {
            values: StateMap::new(),
            observers,
        }
    }

    /// Store `value` under `key` without notifying anyone.
    pub fn set_silent(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        tracing::debug!(%key, %value, "seed");
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn values(&self) -> &StateMap {
        &self.values
    }

    pub fn observers(&self) -> &[O] {
        &self.observers
    }

    pub fn observers_mut(&mut self) -> &mut [O] {
        &mut self.observers
    }

    /// Serialize the current state for logs and diagnostics.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.values).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<O: Observer> UiState<O> {
    /// Store `value` under `key`, then refresh every observer in order.
    ///
    /// The first failing observer ends the pass; observers after it keep
    /// their previous content. The new value stays stored either way.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), RefreshError> {
        let key = key.into();
        let value = value.into();
        tracing::debug!(%key, %value, "set");
        self.values.insert(key, value);
        self.refresh_all()
    }

    /// Refresh every observer against the current state.
    pub fn refresh_all(&mut self) -> Result<(), RefreshError> {
        for (index, observer) in self.observers.iter_mut().enumerate() {
            if let Err(source) = observer.refresh(&self.values) {
                tracing::warn!(index, error = %source, "refresh failed");
                return Err(RefreshError { index, source });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every state it is refreshed with into a shared log.
    struct Recorder {
        id: usize,
        log: Rc<RefCell<Vec<(usize, StateMap)>>>,
    }

    impl Observer for Recorder {
        fn refresh(&mut self, state: &StateMap) -> Result<(), CallbackError> {
            self.log.borrow_mut().push((self.id, state.clone()));
            Ok(())
        }
    }

    struct Failing;

    impl Observer for Failing {
        fn refresh(&mut self, _state: &StateMap) -> Result<(), CallbackError> {
            Err(CallbackError::MissingArgument("y".into()))
        }
    }

    #[test]
    fn silent_set_never_notifies() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = UiState::new(vec![Recorder { id: 0, log: log.clone() }]);
        state.set_silent("x", 1);
        state.set_silent("y", 2.5);
        assert!(log.borrow().is_empty());
        assert_eq!(state.get("y"), Some(&Value::Float(2.5)));
    }

    #[test]
    fn set_refreshes_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = UiState::new(vec![
            Recorder { id: 0, log: log.clone() },
            Recorder { id: 1, log: log.clone() },
        ]);
        state.set("x", 3).unwrap();
        let log = log.borrow();
        let ids: Vec<usize> = log.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(log[1].1.get("x"), Some(&Value::Int(3)));
    }

    #[test]
    fn absent_keys_are_created() {
        let mut state: UiState<Recorder> = UiState::default();
        state.set("fresh", "value").unwrap();
        assert_eq!(state.get("fresh"), Some(&Value::from("value")));
    }

    #[test]
    fn failure_stops_the_pass_but_keeps_the_value() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state: UiState<Box<dyn Observer>> = UiState::new(vec![
            Box::new(Failing) as Box<dyn Observer>,
            Box::new(Recorder { id: 1, log: log.clone() }),
        ]);
        let err = state.set("x", 1).unwrap_err();
        assert_eq!(err.index, 0);
        assert!(log.borrow().is_empty());
        assert_eq!(state.get("x"), Some(&Value::Int(1)));
    }

    #[test]
    fn snapshot_keeps_insertion_order() {
        let mut state: UiState<Recorder> = UiState::default();
        state.set_silent("b", 1);
        state.set_silent("a", 2);
        assert_eq!(state.snapshot_json(), r#"{"b":1,"a":2}"#);
    }
}
