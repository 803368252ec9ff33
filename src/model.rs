//! Data model for a module description — format-agnostic.

use serde::Deserialize;
use serde_json::Value;

/// Complete description of a single configuration module.
#[derive(Debug, Default, Deserialize)]
pub struct Document {
    /// Free-text header comment, emitted verbatim before the tables.
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

impl Document {
    pub fn has_inputs(&self) -> bool {
        !self.inputs.is_empty()
    }

    pub fn has_outputs(&self) -> bool {
        !self.outputs.is_empty()
    }
}

/// A documented module parameter.
#[derive(Debug, Default, Deserialize)]
pub struct Input {
    pub name: String,
    /// May contain embedded line breaks.
    #[serde(default)]
    pub description: String,
    /// Free-text type expression, e.g. "string" or "list(string)".
    #[serde(default, rename = "type")]
    pub type_expr: String,
    /// Absent default marks the parameter required. Distinct from a default
    /// that happens to be the empty string.
    #[serde(default)]
    pub default: Option<Value>,
}

impl Input {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn is_required(&self) -> bool {
        !self.has_default()
    }
}

/// A documented value the module exposes.
#[derive(Debug, Default, Deserialize)]
pub struct Output {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Render a default value as display text: compact JSON, so strings keep
/// their quotes and aggregates stay on one line.
pub fn printable_value(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Sort inputs alphabetically. Stable.
pub fn sort_inputs_by_name(inputs: &mut [Input]) {
    inputs.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Sort inputs with required parameters first, then alphabetically.
pub fn sort_inputs_by_required(inputs: &mut [Input]) {
    inputs.sort_by(|a, b| {
        b.is_required()
            .cmp(&a.is_required())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Sort outputs alphabetically. Stable.
pub fn sort_outputs_by_name(outputs: &mut [Output]) {
    outputs.sort_by(|a, b| a.name.cmp(&b.name));
}
