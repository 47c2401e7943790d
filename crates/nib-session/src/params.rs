//! Sketch parameters and control bindings.

use crate::error::StateError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A single parameter value.
///
/// Serializes to the plain JSON shapes used in state snapshots: booleans,
/// numbers, strings, `{min,max}`, `{x,y,z}` and `{x,y}` objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Toggle(bool),
    Number(f64),
    Text(String),
    Interval { min: f64, max: f64 },
    Point3 { x: f64, y: f64, z: f64 },
    Point2 { x: f64, y: f64 },
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Toggle(b)
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

/// A flat, ordered map of named parameter values.
///
/// One instance spans a sketch session; controls and restored snapshots
/// mutate it in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing an existing name in place.
    pub fn set(&mut self, name: &str, value: ParamValue) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn toggle(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            ParamValue::Toggle(b) => Some(*b),
            _ => None,
        }
    }

    pub fn interval(&self, name: &str) -> Option<(f64, f64)> {
        match self.get(name)? {
            ParamValue::Interval { min, max } => Some((*min, *max)),
            _ => None,
        }
    }

    pub fn point2(&self, name: &str) -> Option<(f64, f64)> {
        match self.get(name)? {
            ParamValue::Point2 { x, y } => Some((*x, *y)),
            _ => None,
        }
    }

    pub fn point3(&self, name: &str) -> Option<(f64, f64, f64)> {
        match self.get(name)? {
            ParamValue::Point3 { x, y, z } => Some((*x, *y, *z)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Assign every entry of `overrides` into self, appending new names.
    pub fn merge(&mut self, overrides: &Params) {
        for (name, value) in overrides.iter() {
            self.set(name, value.clone());
        }
    }

    /// Snapshot as a JSON object.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (name, value) in self.iter() {
            // ParamValue serializes to plain JSON shapes; this cannot fail.
            if let Ok(v) = serde_json::to_value(value) {
                map.insert(name.to_string(), v);
            }
        }
        Value::Object(map)
    }

    /// Apply a snapshot, updating only names that already exist with a
    /// value of the expected shape. Unknown names are warned and skipped.
    pub fn apply_json(&mut self, snapshot: &Value) -> Result<(), StateError> {
        let object = snapshot.as_object().ok_or(StateError::NotAnObject)?;
        for (name, raw) in object {
            if !self.contains(name) {
                warn!(param = %name, "ignoring unknown parameter in snapshot");
                continue;
            }
            match serde_json::from_value::<ParamValue>(raw.clone()) {
                Ok(value) => self.set(name, value),
                Err(e) => warn!(param = %name, error = %e, "ignoring malformed parameter"),
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.set(&name, value);
        }
        params
    }
}

/// Descriptor for one pane control.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// `(label, value)` pairs for enumerated controls.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<(String, String)>,
}

impl Binding {
    pub fn slider(min: f64, max: f64, step: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            step: Some(step),
            ..Self::default()
        }
    }

    pub fn options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            options: options
                .into_iter()
                .map(|(l, v)| (l.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Continuous controls are the ones whose redraws get debounced.
    pub fn is_slider(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }
}

/// Ordered map of control descriptors, keyed by parameter name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    entries: Vec<(String, Binding)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, binding: Binding) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, b)) => *b = binding,
            None => self.entries.push((name.to_string(), binding)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, b)| b)
    }

    pub fn merge(&mut self, overrides: &Bindings) {
        for (name, binding) in &overrides.entries {
            self.set(name, binding.clone());
        }
    }
}
