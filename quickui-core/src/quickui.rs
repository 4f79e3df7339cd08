//! Declarative builder: named inputs plus attached outputs.

use std::fmt;

use indexmap::IndexMap;

use crate::input::Input;
use crate::output::Output;
use crate::session::{Seeded, Session};

/// A UI description, turned into a live [`Session`] by the terminal host.
#[derive(Debug, Default)]
pub struct QuickUi {
    parameters: IndexMap<String, Input>,
    attached: Vec<Output>,
}

/// Build a UI over the given named inputs.
///
/// Names keep their first-seen position; a repeated name replaces the
/// earlier input.
pub fn forall<I, K, V>(parameters: I) -> QuickUi
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Input>,
{
    QuickUi {
        parameters: parameters
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
        attached: Vec::new(),
    }
}

impl QuickUi {
    /// Add or replace one named input.
    pub fn param(mut self, name: impl Into<String>, input: impl Into<Input>) -> Self {
        self.parameters.insert(name.into(), input.into());
        self
    }

    /// Append outputs after any already attached.
    pub fn attach<I>(mut self, outputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Output>,
    {
        self.attached.extend(outputs.into_iter().map(Into::into));
        self
    }

    pub fn parameters(&self) -> &IndexMap<String, Input> {
        &self.parameters
    }

    pub fn attached(&self) -> &[Output] {
        &self.attached
    }

    /// Seed every input, then mount and first-render every output.
    pub fn into_session(self) -> Session {
        Seeded::seed(&self.parameters, self.attached).mount()
    }
}

impl fmt::Display for QuickUi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<QuickUI>")
    }
}
