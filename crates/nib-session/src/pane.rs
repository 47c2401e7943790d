//! The settings-panel seam.

use crate::error::StateError;
use crate::params::Params;
use serde_json::Value;

/// An opaque settings panel.
///
/// The driver treats the panel as a capability that can export its state
/// as JSON, import a previous snapshot back into the parameter map, and
/// refresh its widgets after a programmatic change. A real widget library
/// sits behind this trait in a GUI build; [`BasicPane`] is the in-process
/// implementation used by the CLI and tests.
pub trait Pane {
    /// Apply a snapshot onto the parameter map.
    fn import_state(&mut self, params: &mut Params, state: &Value) -> Result<(), StateError>;

    /// Export the current parameter map as a snapshot.
    fn export_state(&self, params: &Params) -> Value;

    /// Re-read widget values after `params` changed underneath the panel.
    fn refresh(&mut self, params: &Params);
}

/// A panel backed directly by the parameter map.
#[derive(Debug, Default)]
pub struct BasicPane {
    refreshes: usize,
}

impl BasicPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the panel has been refreshed.
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }
}

impl Pane for BasicPane {
    fn import_state(&mut self, params: &mut Params, state: &Value) -> Result<(), StateError> {
        params.apply_json(state)
    }

    fn export_state(&self, params: &Params) -> Value {
        params.to_json()
    }

    fn refresh(&mut self, _params: &Params) {
        self.refreshes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;
    use serde_json::json;

    #[test]
    fn import_then_export_is_stable() {
        let mut pane = BasicPane::new();
        let mut params = Params::new();
        params.set("count", ParamValue::from(1.0));

        pane.import_state(&mut params, &json!({"count": 42})).unwrap();
        assert_eq!(params.number("count"), Some(42.0));
        assert_eq!(pane.export_state(&params), json!({"count": 42.0}));
    }

    #[test]
    fn import_propagates_shape_errors() {
        let mut pane = BasicPane::new();
        let mut params = Params::new();
        assert!(pane.import_state(&mut params, &json!([1, 2, 3])).is_err());
    }

    #[test]
    fn refresh_is_counted() {
        let mut pane = BasicPane::new();
        let params = Params::new();
        pane.refresh(&params);
        pane.refresh(&params);
        assert_eq!(pane.refreshes(), 2);
    }
}
