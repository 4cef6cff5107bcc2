//! Construction configuration for every input type.
//!
//! Every optional attribute has an explicit default, so a configuration
//! deserialized from a partial document (or built with `..Default::default()`)
//! is always complete. Keys are camelCase on the wire.

use crate::hints::HintConfig;
use serde::{Deserialize, Serialize};

/// Attributes shared by every input.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputConfig {
    pub label: String,
    pub name: String,
    pub required: bool,
    /// Opaque formatting hint for renderers, stored verbatim.
    pub mask: Option<String>,
}

impl InputConfig {
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self { label: label.into(), name: name.into(), required: false, mask: None }
    }

    #[must_use]
    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(mask.into());
        self
    }
}

/// A `{regexp, message}` pair: the message is shown while the expression does not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintInstruction {
    pub regexp: String,
    pub message: String,
}

impl HintInstruction {
    pub fn new(regexp: impl Into<String>, message: impl Into<String>) -> Self {
        Self { regexp: regexp.into(), message: message.into() }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextualInputConfig {
    #[serde(flatten)]
    pub base: InputConfig,
    /// Regular expression the value must contain a match for.
    pub pattern: Option<String>,
    pub hints_instructions: Vec<HintInstruction>,
}

/// Numeric domain of a [`NumericalInputConfig`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Integers,
    #[default]
    Floats,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericalInputConfig {
    #[serde(flatten)]
    pub base: InputConfig,
    #[serde(rename = "type")]
    pub kind: NumberKind,
    pub min_val: Option<f64>,
    pub max_val: Option<f64>,
    pub increment_step: Option<f64>,
    pub hint_config: HintConfig,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleInputConfig {
    #[serde(flatten)]
    pub base: InputConfig,
    pub initial_state: bool,
    pub hint_config: HintConfig,
}

/// Data needed to build an option entity.
///
/// `value` defaults to the empty string, which option construction rejects.
/// Unknown keys are refused, so a malformed group is never read as an option.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InputOptionConfig {
    pub label: Option<String>,
    pub value: String,
    pub disabled: bool,
    pub pre_selected: bool,
}

impl InputOptionConfig {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: Some(label.into()), value: value.into(), ..Self::default() }
    }
}

/// A group of option configurations as found in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroupSource {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    pub options: Vec<InputOptionConfig>,
}

/// One element of a mixed option list: a group (recognized by its `options`
/// key) or a single option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionSource {
    Group(OptionGroupSource),
    Option(InputOptionConfig),
}

/// Serializable description of an option-based input.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionInputSource {
    #[serde(flatten)]
    pub base: InputConfig,
    pub options: Vec<OptionSource>,
    pub hint_config: HintConfig,
}
